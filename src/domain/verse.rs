use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl Verse {
    /// Human-readable locator, e.g. `John 3:16`.
    ///
    /// Favorites are stored under this string, so changing the format
    /// orphans every previously saved entry.
    pub fn reference(&self) -> String {
        format_reference(&self.book_name, self.chapter, self.verse)
    }

    pub fn key(&self) -> VerseKey {
        VerseKey::new(&self.book_id, self.chapter, self.verse)
    }

    /// Verse text with the API's trailing line breaks removed.
    pub fn display_text(&self) -> &str {
        self.text.trim()
    }

    pub fn share_text(&self) -> String {
        format_share(&self.text, &self.reference())
    }
}

pub fn format_reference(book_name: &str, chapter: u32, verse: u32) -> String {
    format!("{} {}:{}", book_name, chapter, verse)
}

/// `"text" — reference`, the line used when quoting a verse elsewhere.
pub fn format_share(text: &str, reference: &str) -> String {
    format!("\"{}\" — {}", text.trim(), reference)
}

/// Stable identity of a verse that does not depend on display formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerseKey {
    pub book_id: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(book_id: &str, chapter: u32, verse: u32) -> Self {
        Self {
            book_id: book_id.to_lowercase(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.book_id, self.chapter, self.verse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub book_id: String,
    pub book_name: String,
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

impl Chapter {
    pub fn title(&self) -> String {
        format!("{} {}", self.book_name, self.chapter)
    }

    pub fn find_verse(&self, verse: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.verse == verse)
    }
}
