use serde::{Deserialize, Serialize};

use crate::app::Result;
use crate::domain::{Chapter, Verse};

/// Response body of the scripture API, for both chapter and passage lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    pub reference: String,
    pub verses: Vec<Verse>,
    pub text: String,
    pub translation_id: String,
    pub translation_name: String,
    pub translation_note: String,
}

impl ApiResponse {
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }
}

/// Chapter bodies must carry a `verses` array; error bodies such as
/// `{"error":"not found"}` are rejected rather than read as empty.
#[derive(Deserialize)]
struct ChapterResponse {
    verses: Vec<Verse>,
}

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, body: &[u8]) -> Result<ApiResponse> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Repackages a chapter response.
    ///
    /// Book metadata comes from the first verse when it carries any, else the
    /// requested `book_id` stands in for both id and name. The chapter number
    /// is always the requested one.
    pub fn normalize_chapter(&self, book_id: &str, chapter: u32, body: &[u8]) -> Result<Chapter> {
        let response: ChapterResponse = serde_json::from_slice(body)?;
        let first = response.verses.first();

        let book_id_out = first
            .map(|v| v.book_id.as_str())
            .filter(|id| !id.is_empty())
            .unwrap_or(book_id)
            .to_string();
        let book_name = first
            .map(|v| v.book_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(book_id)
            .to_string();

        Ok(Chapter {
            book_id: book_id_out,
            book_name,
            chapter,
            verses: response.verses,
        })
    }
}
