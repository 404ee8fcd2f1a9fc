//! Saved verses, kept as one JSON array in a single store slot.
//!
//! The list is newest first and holds at most one entry per reference
//! string. Every mutation rewrites the whole array. Storage and decoding
//! failures never reach the caller: reads degrade to an empty list and
//! writes report `false`.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::Result;
use crate::domain::{FavoriteVerse, NewFavorite};
use crate::store::Store;

pub const FAVORITES_KEY: &str = "openbible-favorites";

pub struct Favorites<S> {
    store: Arc<S>,
}

impl<S> Clone for Favorites<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: Store> Favorites<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<FavoriteVerse> {
        match self.load() {
            Ok(favorites) => favorites,
            Err(e) => {
                tracing::error!("Error loading favorites: {}", e);
                Vec::new()
            }
        }
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.list().iter().any(|fav| fav.reference == reference)
    }

    /// Saves `verse` stamped with the current time.
    ///
    /// Returns `false` without writing when the reference is already saved.
    pub fn add(&self, verse: NewFavorite) -> bool {
        self.add_at(verse, Utc::now())
    }

    pub fn add_at(&self, verse: NewFavorite, saved_at: DateTime<Utc>) -> bool {
        let mut favorites = self.list();

        if favorites.iter().any(|fav| fav.reference == verse.reference) {
            tracing::debug!("{} is already a favorite", verse.reference);
            return false;
        }

        let reference = verse.reference.clone();
        favorites.insert(0, verse.stamp(saved_at));

        match self.save(&favorites) {
            Ok(()) => {
                tracing::info!("Added {} to favorites", reference);
                true
            }
            Err(e) => {
                tracing::error!("Error adding to favorites: {}", e);
                false
            }
        }
    }

    /// Drops every entry for `reference`. Absent references still count as
    /// a successful removal; only a failed write returns `false`.
    pub fn remove(&self, reference: &str) -> bool {
        let favorites: Vec<FavoriteVerse> = self
            .list()
            .into_iter()
            .filter(|fav| fav.reference != reference)
            .collect();

        match self.save(&favorites) {
            Ok(()) => {
                tracing::info!("Removed {} from favorites", reference);
                true
            }
            Err(e) => {
                tracing::error!("Error removing from favorites: {}", e);
                false
            }
        }
    }

    fn load(&self) -> Result<Vec<FavoriteVerse>> {
        match self.store.get(FAVORITES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, favorites: &[FavoriteVerse]) -> Result<()> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &raw)
    }
}
