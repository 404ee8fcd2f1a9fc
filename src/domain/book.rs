use serde::Serialize;

/// Catalog entry. Instances only exist in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BibleBook {
    pub book_id: &'static str,
    /// Three-letter code the scripture API puts on verses, e.g. `SNG`.
    pub api_id: &'static str,
    pub book_name: &'static str,
    pub chapters: u32,
}

impl BibleBook {
    pub const fn new(
        book_id: &'static str,
        api_id: &'static str,
        book_name: &'static str,
        chapters: u32,
    ) -> Self {
        Self {
            book_id,
            api_id,
            book_name,
            chapters,
        }
    }

    pub fn has_chapter(&self, chapter: u32) -> bool {
        (1..=self.chapters).contains(&chapter)
    }
}
