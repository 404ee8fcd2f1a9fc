use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::verse::{format_reference, format_share, Verse, VerseKey};

/// A saved verse as persisted in the favorites slot.
///
/// Field names follow the JSON layout of existing exports (`savedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteVerse {
    pub reference: String,
    pub text: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
}

impl FavoriteVerse {
    pub fn key(&self) -> Option<VerseKey> {
        self.book_id
            .as_deref()
            .map(|id| VerseKey::new(id, self.chapter, self.verse))
    }

    /// Quoted text followed by its reference, suitable for sharing.
    pub fn share_text(&self) -> String {
        format_share(&self.text, &self.reference)
    }
}

/// A favorite before it has been stamped with `saved_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub reference: String,
    pub text: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub book_id: Option<String>,
}

impl NewFavorite {
    pub fn stamp(self, saved_at: DateTime<Utc>) -> FavoriteVerse {
        FavoriteVerse {
            reference: self.reference,
            text: self.text,
            book_name: self.book_name,
            chapter: self.chapter,
            verse: self.verse,
            saved_at,
            book_id: self.book_id,
        }
    }
}

impl From<&Verse> for NewFavorite {
    fn from(verse: &Verse) -> Self {
        Self {
            reference: format_reference(&verse.book_name, verse.chapter, verse.verse),
            text: verse.text.clone(),
            book_name: verse.book_name.clone(),
            chapter: verse.chapter,
            verse: verse.verse,
            book_id: Some(verse.book_id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn john_3_16() -> Verse {
        Verse {
            book_id: "JHN".into(),
            book_name: "John".into(),
            chapter: 3,
            verse: 16,
            text: "For God so loved the world\n".into(),
        }
    }

    #[test]
    fn test_new_favorite_from_verse() {
        let fav = NewFavorite::from(&john_3_16());
        assert_eq!(fav.reference, "John 3:16");
        assert_eq!(fav.book_id.as_deref(), Some("JHN"));
    }

    #[test]
    fn test_serialized_field_names() {
        let saved_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let fav = NewFavorite::from(&john_3_16()).stamp(saved_at);
        let json = serde_json::to_value(&fav).unwrap();

        assert_eq!(json["reference"], "John 3:16");
        assert_eq!(json["book_name"], "John");
        assert_eq!(json["savedAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("saved_at").is_none());
    }

    #[test]
    fn test_deserialize_record_without_book_id() {
        let json = r#"{
            "reference": "Romans 8:1",
            "text": "Therefore, there is now no condemnation",
            "book_name": "Romans",
            "chapter": 8,
            "verse": 1,
            "savedAt": "2024-05-06T07:08:09.123Z"
        }"#;

        let fav: FavoriteVerse = serde_json::from_str(json).unwrap();
        assert_eq!(fav.reference, "Romans 8:1");
        assert!(fav.book_id.is_none());
        assert!(fav.key().is_none());
        assert_eq!(fav.saved_at.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_key_when_book_id_known() {
        let fav = NewFavorite::from(&john_3_16()).stamp(Utc::now());
        assert_eq!(fav.key(), Some(VerseKey::new("jhn", 3, 16)));
    }

    #[test]
    fn test_share_text() {
        let fav = NewFavorite::from(&john_3_16()).stamp(Utc::now());
        assert_eq!(
            fav.share_text(),
            "\"For God so loved the world\" — John 3:16"
        );
    }
}
