use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::catalog::{self, BIBLE_BOOKS};
use crate::domain::{BibleBook, Chapter, FavoriteVerse, FeaturedVerse, NewFavorite, Verse, VerseKey};
use crate::favorites::Favorites;
use crate::featured;
use crate::normalizer::ApiResponse;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Read,
    Search,
    Favorites,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Read, ActiveView::Search, ActiveView::Favorites];

    pub fn next(self) -> Self {
        match self {
            ActiveView::Read => ActiveView::Search,
            ActiveView::Search => ActiveView::Favorites,
            ActiveView::Favorites => ActiveView::Read,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveView::Read => ActiveView::Favorites,
            ActiveView::Search => ActiveView::Read,
            ActiveView::Favorites => ActiveView::Search,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Read => "Read",
            ActiveView::Search => "Search",
            ActiveView::Favorites => "Favorites",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ActiveView::Read => 0,
            ActiveView::Search => 1,
            ActiveView::Favorites => 2,
        }
    }
}

/// A chapter fetch the event loop should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRequest {
    pub generation: u64,
    pub book_id: &'static str,
    pub chapter: u32,
}

/// A passage lookup the event loop should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

/// UI state for the reader.
///
/// Requests are issued by bumping a generation counter; results carrying an
/// older generation are dropped so a slow response for a chapter the user
/// already left never replaces the one on screen.
pub struct TuiApp {
    pub active_view: ActiveView,

    pub book_index: usize,
    pub chapter_number: u32,
    pub chapter: Option<Chapter>,
    pub favorite_flags: HashMap<VerseKey, bool>,
    pub verse_index: usize,
    pub is_loading: bool,
    chapter_generation: u64,
    pending_verse: Option<u32>,

    pub search_input: String,
    pub is_editing: bool,
    pub search_results: Option<ApiResponse>,
    pub search_index: usize,
    pub is_searching: bool,
    search_generation: u64,
    last_query: String,

    pub favorites: Vec<FavoriteVerse>,
    pub favorite_index: usize,

    pub featured: &'static FeaturedVerse,
    next_rotation: DateTime<Utc>,

    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    /// Starts on `book_id`/`chapter`, falling back to John 1 for anything the
    /// catalog doesn't know.
    pub fn new(book_id: &str, chapter: u32, now: DateTime<Utc>) -> Self {
        let book_index = catalog::book_index(book_id)
            .or_else(|| catalog::book_index("john"))
            .unwrap_or(0);
        let chapter_number = if BIBLE_BOOKS[book_index].has_chapter(chapter) {
            chapter
        } else {
            1
        };

        Self {
            active_view: ActiveView::Read,
            book_index,
            chapter_number,
            chapter: None,
            favorite_flags: HashMap::new(),
            verse_index: 0,
            is_loading: false,
            chapter_generation: 0,
            pending_verse: None,
            search_input: String::new(),
            is_editing: false,
            search_results: None,
            search_index: 0,
            is_searching: false,
            search_generation: 0,
            last_query: String::new(),
            favorites: Vec::new(),
            favorite_index: 0,
            featured: featured::featured_at(now),
            next_rotation: featured::next_rotation_at(now),
            should_quit: false,
            status_message: None,
        }
    }

    pub fn current_book(&self) -> &'static BibleBook {
        &BIBLE_BOOKS[self.book_index]
    }

    // Read view

    /// Issues a fetch for the current book and chapter.
    pub fn request_chapter(&mut self) -> ChapterRequest {
        self.chapter_generation += 1;
        self.is_loading = true;
        ChapterRequest {
            generation: self.chapter_generation,
            book_id: self.current_book().book_id,
            chapter: self.chapter_number,
        }
    }

    /// Switching books always starts at chapter 1.
    pub fn select_book(&mut self, index: usize) -> Option<ChapterRequest> {
        if index >= BIBLE_BOOKS.len() {
            return None;
        }
        self.book_index = index;
        self.chapter_number = 1;
        self.pending_verse = None;
        Some(self.request_chapter())
    }

    pub fn next_book(&mut self) -> Option<ChapterRequest> {
        self.select_book(self.book_index + 1)
    }

    pub fn prev_book(&mut self) -> Option<ChapterRequest> {
        let index = self.book_index.checked_sub(1)?;
        self.select_book(index)
    }

    pub fn next_chapter(&mut self) -> Option<ChapterRequest> {
        let chapter = catalog::next_chapter(self.current_book(), self.chapter_number)?;
        self.chapter_number = chapter;
        self.pending_verse = None;
        Some(self.request_chapter())
    }

    pub fn prev_chapter(&mut self) -> Option<ChapterRequest> {
        let chapter = catalog::prev_chapter(self.current_book(), self.chapter_number)?;
        self.chapter_number = chapter;
        self.pending_verse = None;
        Some(self.request_chapter())
    }

    /// Jumps to a chapter and, once it arrives, selects `verse`.
    pub fn go_to(&mut self, book_id: &str, chapter: u32, verse: Option<u32>) -> Option<ChapterRequest> {
        let index = catalog::book_index(book_id)?;
        if !BIBLE_BOOKS[index].has_chapter(chapter) {
            return None;
        }
        self.book_index = index;
        self.chapter_number = chapter;
        self.pending_verse = verse;
        self.active_view = ActiveView::Read;
        Some(self.request_chapter())
    }

    /// Applies a finished chapter fetch. Returns `false` when the result
    /// belongs to a superseded request and was dropped.
    pub fn apply_chapter<S: Store>(
        &mut self,
        generation: u64,
        chapter: Option<Chapter>,
        favorites: &Favorites<S>,
    ) -> bool {
        if generation != self.chapter_generation {
            tracing::debug!(
                "Dropping stale chapter result (generation {}, current {})",
                generation,
                self.chapter_generation
            );
            return false;
        }

        self.is_loading = false;
        self.verse_index = 0;

        match chapter {
            Some(chapter) => {
                if let Some(verse) = self.pending_verse.take() {
                    if let Some(pos) = chapter.verses.iter().position(|v| v.verse == verse) {
                        self.verse_index = pos;
                    }
                }
                self.chapter = Some(chapter);
                self.refresh_favorite_flags(favorites);
            }
            None => {
                self.pending_verse = None;
                self.chapter = None;
                self.favorite_flags.clear();
                self.set_status(format!(
                    "Error loading {} {}. Try again (R) or pick a different chapter.",
                    self.current_book().book_name,
                    self.chapter_number
                ));
            }
        }

        true
    }

    /// Re-derives the per-verse favorite flags for the displayed chapter.
    pub fn refresh_favorite_flags<S: Store>(&mut self, favorites: &Favorites<S>) {
        let saved: HashSet<String> = favorites.list().into_iter().map(|f| f.reference).collect();

        self.favorite_flags = self
            .chapter
            .iter()
            .flat_map(|c| c.verses.iter())
            .map(|v| (v.key(), saved.contains(&v.reference())))
            .collect();
    }

    /// Chapter flags first; verses outside the displayed chapter (search
    /// results) are checked against the loaded favorites list.
    pub fn is_favorite(&self, verse: &Verse) -> bool {
        match self.favorite_flags.get(&verse.key()) {
            Some(flag) => *flag,
            None => {
                let reference = verse.reference();
                self.favorites.iter().any(|f| f.reference == reference)
            }
        }
    }

    pub fn selected_verse(&self) -> Option<&Verse> {
        self.chapter.as_ref()?.verses.get(self.verse_index)
    }

    // Favorites

    pub fn reload_favorites<S: Store>(&mut self, favorites: &Favorites<S>) {
        self.favorites = favorites.list();
        if self.favorite_index >= self.favorites.len() {
            self.favorite_index = self.favorites.len().saturating_sub(1);
        }
    }

    pub fn selected_favorite(&self) -> Option<&FavoriteVerse> {
        self.favorites.get(self.favorite_index)
    }

    /// Adds or removes `verse` depending on whether it is saved now.
    pub fn toggle_verse_favorite<S: Store>(&mut self, verse: &Verse, favorites: &Favorites<S>) {
        let key = verse.key();
        let reference = verse.reference();
        let saved = match self.favorite_flags.get(&key) {
            Some(flag) => *flag,
            None => favorites.contains(&reference),
        };

        if saved {
            if favorites.remove(&reference) {
                self.favorite_flags.insert(key, false);
                self.set_status(format!("Removed from favorites: {}", reference));
            } else {
                self.set_status(format!("Could not remove {} from favorites", reference));
            }
        } else if favorites.add(NewFavorite::from(verse)) {
            self.favorite_flags.insert(key, true);
            self.set_status(format!("Added to favorites: {}", reference));
        } else if favorites.contains(&reference) {
            self.favorite_flags.insert(key, true);
            self.set_status(format!("{} is already a favorite", reference));
        } else {
            self.set_status(format!("Could not save {}", reference));
        }

        self.reload_favorites(favorites);
    }

    /// Toggles the verse under the cursor in the active view; in the
    /// favorites view the selected entry is removed.
    pub fn toggle_selected_favorite<S: Store>(&mut self, favorites: &Favorites<S>) {
        match self.active_view {
            ActiveView::Read => {
                if let Some(verse) = self.selected_verse().cloned() {
                    self.toggle_verse_favorite(&verse, favorites);
                }
            }
            ActiveView::Search => {
                if let Some(verse) = self.selected_search_verse().cloned() {
                    self.toggle_verse_favorite(&verse, favorites);
                }
            }
            ActiveView::Favorites => self.remove_selected_favorite(favorites),
        }
    }

    pub fn remove_selected_favorite<S: Store>(&mut self, favorites: &Favorites<S>) {
        let Some(favorite) = self.selected_favorite().cloned() else {
            return;
        };

        if favorites.remove(&favorite.reference) {
            self.set_status(format!("Removed from favorites: {}", favorite.reference));
            match favorite.key() {
                Some(key) if self.favorite_flags.contains_key(&key) => {
                    self.favorite_flags.insert(key, false);
                }
                // Legacy records carry no book id; rebuild from the list.
                _ => {
                    self.reload_favorites(favorites);
                    self.refresh_favorite_flags(favorites);
                    return;
                }
            }
        } else {
            self.set_status(format!(
                "Could not remove {} from favorites",
                favorite.reference
            ));
        }

        self.reload_favorites(favorites);
    }

    /// Opens the selected favorite's chapter in the read view.
    pub fn open_selected_favorite(&mut self) -> Option<ChapterRequest> {
        let favorite = self.selected_favorite()?;
        let book_id = catalog::resolve_book(
            favorite.book_id.as_deref().unwrap_or_default(),
            &favorite.book_name,
        )
        .map(|b| b.book_id);

        let (chapter, verse) = (favorite.chapter, favorite.verse);
        match book_id {
            Some(book_id) => self.go_to(book_id, chapter, Some(verse)),
            None => {
                let reference = favorite.reference.clone();
                self.set_status(format!("Cannot open {}: unknown book", reference));
                None
            }
        }
    }

    // Search view

    pub fn start_editing(&mut self) {
        self.active_view = ActiveView::Search;
        self.is_editing = true;
    }

    pub fn cancel_editing(&mut self) {
        self.is_editing = false;
    }

    pub fn push_char(&mut self, c: char) {
        self.search_input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.search_input.pop();
    }

    /// Issues a lookup for the typed query; blank input issues nothing.
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        let query = self.search_input.trim();
        if query.is_empty() {
            return None;
        }

        self.last_query = query.to_string();
        self.is_editing = false;
        self.is_searching = true;
        self.search_generation += 1;

        Some(SearchRequest {
            generation: self.search_generation,
            query: self.last_query.clone(),
        })
    }

    pub fn apply_search(&mut self, generation: u64, response: Option<ApiResponse>) -> bool {
        if generation != self.search_generation {
            tracing::debug!("Dropping stale search result (generation {})", generation);
            return false;
        }

        self.is_searching = false;
        self.search_index = 0;

        match response {
            Some(response) => {
                self.set_status(format!("Found results for \"{}\"", self.last_query));
                self.search_results = Some(response);
            }
            None => {
                self.search_results = None;
                self.set_status(format!(
                    "No results for \"{}\". Try a reference like \"John 3\" or \"Psalms 23:1\"",
                    self.last_query
                ));
            }
        }

        true
    }

    pub fn search_verses(&self) -> &[Verse] {
        self.search_results
            .as_ref()
            .map(|r| r.verses())
            .unwrap_or(&[])
    }

    pub fn selected_search_verse(&self) -> Option<&Verse> {
        self.search_verses().get(self.search_index)
    }

    /// Opens the chapter containing the selected search result.
    pub fn open_selected_search_verse(&mut self) -> Option<ChapterRequest> {
        let verse = self.selected_search_verse()?;
        let book = catalog::resolve_book(&verse.book_id, &verse.book_name)?;
        let (chapter, number) = (verse.chapter, verse.verse);
        self.go_to(book.book_id, chapter, Some(number))
    }

    // Shared

    pub fn move_up(&mut self) {
        let index = match self.active_view {
            ActiveView::Read => &mut self.verse_index,
            ActiveView::Search => &mut self.search_index,
            ActiveView::Favorites => &mut self.favorite_index,
        };
        *index = index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = match self.active_view {
            ActiveView::Read => self.chapter.as_ref().map_or(0, |c| c.verses.len()),
            ActiveView::Search => self.search_verses().len(),
            ActiveView::Favorites => self.favorites.len(),
        };
        let index = match self.active_view {
            ActiveView::Read => &mut self.verse_index,
            ActiveView::Search => &mut self.search_index,
            ActiveView::Favorites => &mut self.favorite_index,
        };
        if *index + 1 < len {
            *index += 1;
        }
    }

    /// Swaps the featured verse once its window has passed.
    pub fn refresh_featured(&mut self, now: DateTime<Utc>) -> bool {
        if now < self.next_rotation {
            return false;
        }
        self.featured = featured::featured_at(now);
        self.next_rotation = featured::next_rotation_at(now);
        true
    }

    /// Share line and reference for whatever the active view has selected.
    pub fn selected_share_text(&self) -> Option<(String, String)> {
        match self.active_view {
            ActiveView::Read => self.selected_verse().map(|v| (v.share_text(), v.reference())),
            ActiveView::Search => self
                .selected_search_verse()
                .map(|v| (v.share_text(), v.reference())),
            ActiveView::Favorites => self
                .selected_favorite()
                .map(|f| (f.share_text(), f.reference.clone())),
        }
    }

    /// Hands the selected share line to `copy`. When copying fails the
    /// line is shown in the status bar instead.
    pub fn copy_selected<F>(&mut self, copy: F) -> Option<String>
    where
        F: FnOnce(&str) -> Result<(), String>,
    {
        let (text, reference) = self.selected_share_text()?;
        match copy(&text) {
            Ok(()) => self.set_status(format!("Copied to clipboard: {}", reference)),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                self.set_status(text.clone());
            }
        }
        Some(text)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{Duration, TimeZone};

    use crate::featured::ROTATION_WINDOW_MS;
    use crate::store::SqliteStore;

    fn favorites() -> Favorites<SqliteStore> {
        Favorites::new(Arc::new(SqliteStore::in_memory().unwrap()))
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ROTATION_WINDOW_MS * 100 + 5_000).unwrap()
    }

    fn chapter(book_id: &str, book_name: &str, number: u32, verses: u32) -> Chapter {
        Chapter {
            book_id: book_id.into(),
            book_name: book_name.into(),
            chapter: number,
            verses: (1..=verses)
                .map(|v| Verse {
                    book_id: book_id.into(),
                    book_name: book_name.into(),
                    chapter: number,
                    verse: v,
                    text: format!("{} {}:{} text\n", book_name, number, v),
                })
                .collect(),
        }
    }

    fn loaded_app(favs: &Favorites<SqliteStore>) -> TuiApp {
        let mut app = TuiApp::new("john", 3, now());
        let req = app.request_chapter();
        assert!(app.apply_chapter(req.generation, Some(chapter("JHN", "John", 3, 5)), favs));
        app
    }

    #[test]
    fn test_new_falls_back_for_unknown_book_and_chapter() {
        let app = TuiApp::new("tobit", 3, now());
        assert_eq!(app.current_book().book_id, "john");
        assert_eq!(app.chapter_number, 3);

        let app = TuiApp::new("ruth", 9, now());
        assert_eq!(app.current_book().book_id, "ruth");
        assert_eq!(app.chapter_number, 1);
    }

    #[test]
    fn test_view_cycle() {
        assert_eq!(ActiveView::Read.next(), ActiveView::Search);
        assert_eq!(ActiveView::Favorites.next(), ActiveView::Read);
        assert_eq!(ActiveView::Read.prev(), ActiveView::Favorites);
        for view in ActiveView::ALL {
            assert_eq!(view.next().prev(), view);
        }
    }

    #[test]
    fn test_request_chapter_targets_current_selection() {
        let mut app = TuiApp::new("psalms", 23, now());
        let req = app.request_chapter();
        assert_eq!(req.book_id, "psalms");
        assert_eq!(req.chapter, 23);
        assert!(app.is_loading);
    }

    #[test]
    fn test_stale_chapter_result_is_dropped() {
        let favs = favorites();
        let mut app = TuiApp::new("john", 1, now());

        let first = app.request_chapter();
        let second = app.next_chapter().unwrap();
        assert_eq!(second.chapter, 2);

        assert!(app.apply_chapter(second.generation, Some(chapter("JHN", "John", 2, 3)), &favs));
        assert!(!app.apply_chapter(first.generation, Some(chapter("JHN", "John", 1, 9)), &favs));

        assert_eq!(app.chapter.as_ref().unwrap().chapter, 2);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_failed_chapter_clears_display_and_sets_status() {
        let favs = favorites();
        let mut app = loaded_app(&favs);

        let req = app.next_chapter().unwrap();
        assert!(app.apply_chapter(req.generation, None, &favs));
        assert!(app.chapter.is_none());
        assert!(app.favorite_flags.is_empty());
        assert!(app.status_message.as_deref().unwrap().contains("John 4"));
    }

    #[test]
    fn test_changing_book_resets_chapter() {
        let mut app = TuiApp::new("john", 7, now());
        let req = app.next_book().unwrap();
        assert_eq!(req.book_id, "acts");
        assert_eq!(req.chapter, 1);

        let req = app.prev_book().unwrap();
        assert_eq!(req.book_id, "john");
        assert_eq!(req.chapter, 1);
    }

    #[test]
    fn test_navigation_stops_at_edges() {
        let mut app = TuiApp::new("genesis", 1, now());
        assert!(app.prev_chapter().is_none());
        assert!(app.prev_book().is_none());

        let mut app = TuiApp::new("revelation", 22, now());
        assert!(app.next_chapter().is_none());
        assert!(app.next_book().is_none());
        assert_eq!(app.chapter_number, 22);
    }

    #[test]
    fn test_flags_derived_when_chapter_arrives() {
        let favs = favorites();
        favs.add(NewFavorite::from(&chapter("JHN", "John", 3, 5).verses[1]));

        let app = loaded_app(&favs);
        let verses = &app.chapter.as_ref().unwrap().verses;
        assert!(!app.is_favorite(&verses[0]));
        assert!(app.is_favorite(&verses[1]));
        assert_eq!(app.favorite_flags.len(), 5);
    }

    #[test]
    fn test_toggle_favorite_in_read_view() {
        let favs = favorites();
        let mut app = loaded_app(&favs);
        app.move_down();

        app.toggle_selected_favorite(&favs);
        assert!(favs.contains("John 3:2"));
        assert!(app.is_favorite(app.selected_verse().unwrap()));
        assert_eq!(app.favorites.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Added to favorites: John 3:2"));

        app.toggle_selected_favorite(&favs);
        assert!(!favs.contains("John 3:2"));
        assert!(!app.is_favorite(app.selected_verse().unwrap()));
        assert!(app.favorites.is_empty());
    }

    #[test]
    fn test_toggle_with_stale_flag_does_not_duplicate() {
        let favs = favorites();
        let mut app = loaded_app(&favs);

        // Saved elsewhere after the flags were derived.
        favs.add(NewFavorite::from(app.selected_verse().unwrap()));
        app.favorite_flags.clear();

        app.toggle_selected_favorite(&favs);
        assert!(!favs.contains("John 3:1"));
        assert!(favs.list().is_empty());
    }

    #[test]
    fn test_remove_from_favorites_view_updates_read_flags() {
        let favs = favorites();
        let mut app = loaded_app(&favs);
        app.toggle_selected_favorite(&favs);
        assert!(app.is_favorite(app.selected_verse().unwrap()));

        app.active_view = ActiveView::Favorites;
        app.toggle_selected_favorite(&favs);

        assert!(app.favorites.is_empty());
        assert!(!app.is_favorite(app.selected_verse().unwrap()));
    }

    #[test]
    fn test_open_selected_favorite_jumps_to_verse() {
        let favs = favorites();
        favs.add(NewFavorite::from(&chapter("ROM", "Romans", 8, 39).verses[27]));

        let mut app = TuiApp::new("john", 1, now());
        app.reload_favorites(&favs);
        app.active_view = ActiveView::Favorites;

        let req = app.open_selected_favorite().unwrap();
        assert_eq!(req.book_id, "romans");
        assert_eq!(req.chapter, 8);
        assert_eq!(app.active_view, ActiveView::Read);

        app.apply_chapter(req.generation, Some(chapter("ROM", "Romans", 8, 39)), &favs);
        assert_eq!(app.selected_verse().unwrap().verse, 28);
    }

    #[test]
    fn test_open_favorite_without_book_id_uses_name() {
        let favs = favorites();
        favs.add(NewFavorite {
            reference: "1 Peter 5:7".into(),
            text: "Cast all your anxiety on him".into(),
            book_name: "1 Peter".into(),
            chapter: 5,
            verse: 7,
            book_id: None,
        });

        let mut app = TuiApp::new("john", 1, now());
        app.reload_favorites(&favs);
        let req = app.open_selected_favorite().unwrap();
        assert_eq!(req.book_id, "1peter");
    }

    #[test]
    fn test_open_favorite_with_api_code_and_other_name() {
        let favs = favorites();
        favs.add(NewFavorite::from(&chapter("SNG", "Song of Solomon", 2, 4).verses[3]));

        let mut app = TuiApp::new("john", 1, now());
        app.reload_favorites(&favs);
        let req = app.open_selected_favorite().unwrap();
        assert_eq!(req.book_id, "song");
        assert_eq!(req.chapter, 2);
    }

    #[test]
    fn test_copy_selected_verse_in_read_view() {
        let favs = favorites();
        let mut app = loaded_app(&favs);
        app.move_down();

        let mut copied = String::new();
        let text = app.copy_selected(|line| {
            copied = line.to_string();
            Ok(())
        });

        assert_eq!(text.as_deref(), Some("\"John 3:2 text\" — John 3:2"));
        assert_eq!(copied, "\"John 3:2 text\" — John 3:2");
        assert_eq!(app.status_message.as_deref(), Some("Copied to clipboard: John 3:2"));
    }

    #[test]
    fn test_copy_selected_favorite() {
        let favs = favorites();
        favs.add(NewFavorite::from(&chapter("ROM", "Romans", 8, 39).verses[27]));

        let mut app = TuiApp::new("john", 1, now());
        app.reload_favorites(&favs);
        app.active_view = ActiveView::Favorites;

        let text = app.copy_selected(|_| Ok(()));
        assert_eq!(text.as_deref(), Some("\"Romans 8:28 text\" — Romans 8:28"));
        assert_eq!(app.status_message.as_deref(), Some("Copied to clipboard: Romans 8:28"));
    }

    #[test]
    fn test_copy_failure_shows_line_in_status() {
        let favs = favorites();
        let mut app = loaded_app(&favs);

        app.copy_selected(|_| Err("no display".to_string()));
        assert_eq!(app.status_message.as_deref(), Some("\"John 3:1 text\" — John 3:1"));
    }

    #[test]
    fn test_copy_with_nothing_selected() {
        let mut app = TuiApp::new("john", 1, now());
        app.active_view = ActiveView::Favorites;
        assert!(app.copy_selected(|_| panic!("nothing to copy")).is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_submit_search_ignores_blank_input() {
        let mut app = TuiApp::new("john", 1, now());
        app.start_editing();
        app.push_char(' ');
        assert!(app.submit_search().is_none());
        assert!(app.is_editing);

        app.pop_char();
        for c in "John 3:16".chars() {
            app.push_char(c);
        }
        let req = app.submit_search().unwrap();
        assert_eq!(req.query, "John 3:16");
        assert!(!app.is_editing);
        assert!(app.is_searching);
    }

    #[test]
    fn test_stale_search_result_is_dropped() {
        let mut app = TuiApp::new("john", 1, now());
        app.search_input = "John 3".into();
        let first = app.submit_search().unwrap();
        app.search_input = "Psalms 23".into();
        let second = app.submit_search().unwrap();

        let response = ApiResponse {
            reference: "Psalms 23".into(),
            verses: chapter("PSA", "Psalms", 23, 6).verses,
            ..Default::default()
        };
        assert!(app.apply_search(second.generation, Some(response)));
        assert!(!app.apply_search(first.generation, None));

        assert_eq!(app.search_verses().len(), 6);
        assert!(!app.is_searching);
    }

    #[test]
    fn test_failed_search_reports_no_results() {
        let mut app = TuiApp::new("john", 1, now());
        app.search_input = "love".into();
        let req = app.submit_search().unwrap();

        app.apply_search(req.generation, None);
        assert!(app.search_verses().is_empty());
        assert!(app.status_message.as_deref().unwrap().starts_with("No results for \"love\""));
    }

    #[test]
    fn test_toggle_favorite_from_search_results() {
        let favs = favorites();
        let mut app = TuiApp::new("john", 1, now());
        app.search_input = "Psalms 23".into();
        let req = app.submit_search().unwrap();
        app.apply_search(
            req.generation,
            Some(ApiResponse {
                verses: chapter("PSA", "Psalms", 23, 6).verses,
                ..Default::default()
            }),
        );

        app.active_view = ActiveView::Search;
        app.move_down();
        app.toggle_selected_favorite(&favs);
        assert!(favs.contains("Psalms 23:2"));
    }

    #[test]
    fn test_move_bounds_per_view() {
        let favs = favorites();
        let mut app = loaded_app(&favs);

        app.move_up();
        assert_eq!(app.verse_index, 0);
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.verse_index, 4);

        app.active_view = ActiveView::Favorites;
        app.move_down();
        assert_eq!(app.favorite_index, 0);
    }

    #[test]
    fn test_featured_refreshes_on_window_change() {
        let mut app = TuiApp::new("john", 1, now());
        let before = app.featured;

        assert!(!app.refresh_featured(now() + Duration::minutes(5)));
        assert_eq!(app.featured, before);

        let later = now() + Duration::milliseconds(ROTATION_WINDOW_MS);
        assert!(app.refresh_featured(later));
        assert_ne!(app.featured, before);
    }
}
