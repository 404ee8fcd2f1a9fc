use std::collections::HashSet;

use chrono::{Local, Utc};

use crate::app::{AppContext, OpenBibleError, Result};
use crate::catalog::{self, BIBLE_BOOKS};
use crate::domain::{Chapter, FavoriteVerse, NewFavorite, Verse};
use crate::featured;

pub async fn read_chapter(ctx: &AppContext, book_id: &str, chapter: u32) -> Result<()> {
    let book = catalog::find_book(book_id)
        .ok_or_else(|| OpenBibleError::BookNotFound(book_id.to_string()))?;

    if !book.has_chapter(chapter) {
        return Err(OpenBibleError::Other(format!(
            "{} has {} chapters",
            book.book_name, book.chapters
        )));
    }

    let loaded = ctx
        .bible
        .fetch_chapter(book.book_id, chapter)
        .await
        .ok_or_else(|| {
            OpenBibleError::Other(format!(
                "Error loading {} {}. Please try again or select a different chapter.",
                book.book_name, chapter
            ))
        })?;

    let saved: HashSet<String> = ctx
        .favorites
        .list()
        .into_iter()
        .map(|f| f.reference)
        .collect();

    print!("{}", format_chapter(&loaded, &saved));
    Ok(())
}

pub async fn search(ctx: &AppContext, query: &str) -> Result<()> {
    let query = query.trim();

    match ctx.bible.search_verses(query).await {
        Some(response) => {
            if !response.reference.is_empty() {
                println!("{}", response.reference);
                println!();
            }
            for verse in response.verses() {
                println!("{}  {}", verse.reference(), verse.display_text());
            }
            if !response.translation_name.is_empty() {
                println!();
                println!("({})", response.translation_name);
            }
        }
        None => {
            eprintln!("No results found for \"{}\"", query);
            eprintln!("Try searching for a book and chapter like \"John 3\" or \"Psalms 23\"");
        }
    }

    Ok(())
}

pub fn show_featured() -> Result<()> {
    let verse = featured::current_featured();
    let next = featured::next_rotation_at(Utc::now()).with_timezone(&Local);

    println!("\u{201c}{}\u{201d}", verse.text);
    println!("  {}  #{}", verse.reference, verse.theme);
    println!();
    println!("Next verse at {}", next.format("%Y-%m-%d %H:%M"));
    Ok(())
}

pub fn list_books() -> Result<()> {
    for (index, book) in BIBLE_BOOKS.iter().enumerate() {
        if index == 0 {
            println!("Old Testament");
        } else if index == catalog::OLD_TESTAMENT_LEN {
            println!("\nNew Testament");
        }
        println!("  {:<16} {:<18} {:>3} chapters", book.book_id, book.book_name, book.chapters);
    }
    Ok(())
}

/// With `share`, each verse is printed as a quotable one-liner.
pub fn list_favorites(ctx: &AppContext, share: bool) -> Result<()> {
    let favorites = ctx.favorites.list();

    if favorites.is_empty() {
        println!("No favorites yet");
        return Ok(());
    }

    for favorite in &favorites {
        if share {
            println!("{}", favorite.share_text());
        } else {
            print!("{}", format_favorite(favorite));
        }
    }

    Ok(())
}

pub async fn quote(ctx: &AppContext, book_id: &str, chapter: u32, verse: u32) -> Result<()> {
    let found = fetch_verse(ctx, book_id, chapter, verse).await?;
    println!("{}", found.share_text());
    Ok(())
}

async fn fetch_verse(ctx: &AppContext, book_id: &str, chapter: u32, verse: u32) -> Result<Verse> {
    let book = catalog::find_book(book_id)
        .ok_or_else(|| OpenBibleError::BookNotFound(book_id.to_string()))?;

    let loaded = ctx
        .bible
        .fetch_chapter(book.book_id, chapter)
        .await
        .ok_or_else(|| {
            OpenBibleError::Other(format!("Error loading {} {}", book.book_name, chapter))
        })?;

    loaded.find_verse(verse).cloned().ok_or_else(|| {
        OpenBibleError::VerseNotFound(format!("{} {}:{}", book.book_name, chapter, verse))
    })
}

pub async fn add_favorite(ctx: &AppContext, book_id: &str, chapter: u32, verse: u32) -> Result<()> {
    let found = fetch_verse(ctx, book_id, chapter, verse).await?;

    if ctx.favorites.add(NewFavorite::from(&found)) {
        println!("Added to favorites: {}", found.reference());
    } else if ctx.favorites.contains(&found.reference()) {
        println!("Already in favorites: {}", found.reference());
    } else {
        return Err(OpenBibleError::Other(format!(
            "Could not save {}",
            found.reference()
        )));
    }

    Ok(())
}

pub fn remove_favorite(ctx: &AppContext, reference: &str) -> Result<()> {
    let reference = reference.trim();

    if !ctx.favorites.contains(reference) {
        println!("Not in favorites: {}", reference);
        return Ok(());
    }

    if ctx.favorites.remove(reference) {
        println!("Removed from favorites: {}", reference);
        Ok(())
    } else {
        Err(OpenBibleError::Other(format!("Could not remove {}", reference)))
    }
}

fn format_chapter(chapter: &Chapter, saved: &HashSet<String>) -> String {
    let mut out = format!("{}\n\n", chapter.title());
    for verse in &chapter.verses {
        out.push_str(&format_verse_line(verse, saved.contains(&verse.reference())));
    }
    out
}

fn format_verse_line(verse: &Verse, is_favorite: bool) -> String {
    let marker = if is_favorite { "\u{2665}" } else { " " };
    format!("{} {:>3}  {}\n", marker, verse.verse, verse.display_text())
}

fn format_favorite(favorite: &FavoriteVerse) -> String {
    format!(
        "{}  (saved {})\n  {}\n",
        favorite.reference,
        favorite.saved_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        favorite.text.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::api::BibleClient;
    use crate::config::Config;
    use crate::fetcher::Fetcher;

    struct CannedFetcher(&'static str);

    #[async_trait]
    impl Fetcher for CannedFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    const PSALM_23: &str = r#"{
        "reference": "Psalms 23",
        "verses": [
            {"book_id": "PSA", "book_name": "Psalms", "chapter": 23, "verse": 1, "text": "The LORD is my shepherd, I lack nothing.\n"},
            {"book_id": "PSA", "book_name": "Psalms", "chapter": 23, "verse": 2, "text": "He makes me lie down in green pastures,\n"}
        ],
        "translation_name": "World English Bible"
    }"#;

    fn context() -> AppContext {
        let mut ctx = AppContext::in_memory(Config::default()).unwrap();
        ctx.bible = BibleClient::new(Arc::new(CannedFetcher(PSALM_23)), "https://bible-api.com").unwrap();
        ctx
    }

    fn sample_verse(verse: u32) -> Verse {
        Verse {
            book_id: "PSA".into(),
            book_name: "Psalms".into(),
            chapter: 23,
            verse,
            text: " The LORD is my shepherd \n".into(),
        }
    }

    #[test]
    fn test_verse_line_marks_favorites() {
        assert_eq!(
            format_verse_line(&sample_verse(1), true),
            "\u{2665}   1  The LORD is my shepherd\n"
        );
        assert!(format_verse_line(&sample_verse(1), false).starts_with("    1"));
    }

    #[test]
    fn test_format_chapter_has_title() {
        let chapter = Chapter {
            book_id: "psalms".into(),
            book_name: "Psalms".into(),
            chapter: 23,
            verses: vec![sample_verse(1), sample_verse(2)],
        };
        let saved: HashSet<String> = ["Psalms 23:2".to_string()].into_iter().collect();

        let out = format_chapter(&chapter, &saved);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], chapter.title());
        assert!(lines[2].starts_with(' '));
        assert!(lines[3].starts_with('\u{2665}'));
    }

    #[tokio::test]
    async fn test_add_favorite() {
        let ctx = context();
        add_favorite(&ctx, "psalms", 23, 2).await.unwrap();

        let list = ctx.favorites.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].reference, "Psalms 23:2");
        assert_eq!(list[0].book_id.as_deref(), Some("PSA"));

        // Second add is reported, not duplicated.
        add_favorite(&ctx, "psalms", 23, 2).await.unwrap();
        assert_eq!(ctx.favorites.list().len(), 1);
    }

    #[tokio::test]
    async fn test_add_favorite_rejects_unknown_book_and_verse() {
        let ctx = context();
        assert!(matches!(
            add_favorite(&ctx, "tobit", 1, 1).await,
            Err(OpenBibleError::BookNotFound(_))
        ));
        assert!(matches!(
            add_favorite(&ctx, "psalms", 23, 9).await,
            Err(OpenBibleError::VerseNotFound(_))
        ));
        assert!(ctx.favorites.list().is_empty());
    }

    #[tokio::test]
    async fn test_quote_fetches_single_verse() {
        let ctx = context();
        let verse = fetch_verse(&ctx, "psalms", 23, 1).await.unwrap();
        assert_eq!(
            verse.share_text(),
            "\"The LORD is my shepherd, I lack nothing.\" — Psalms 23:1"
        );
        assert!(quote(&ctx, "psalms", 23, 1).await.is_ok());
        assert!(matches!(
            quote(&ctx, "psalms", 23, 7).await,
            Err(OpenBibleError::VerseNotFound(_))
        ));
        assert!(ctx.favorites.list().is_empty());
    }

    #[tokio::test]
    async fn test_read_chapter_checks_bounds() {
        let ctx = context();
        assert!(read_chapter(&ctx, "psalms", 23).await.is_ok());
        assert!(read_chapter(&ctx, "psalms", 151).await.is_err());
        assert!(read_chapter(&ctx, "jubilees", 1).await.is_err());
    }

    #[tokio::test]
    async fn test_remove_favorite() {
        let ctx = context();
        add_favorite(&ctx, "psalms", 23, 1).await.unwrap();

        remove_favorite(&ctx, " Psalms 23:1 ").unwrap();
        assert!(ctx.favorites.list().is_empty());
        assert!(remove_favorite(&ctx, "Psalms 23:1").is_ok());
    }
}
