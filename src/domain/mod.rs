pub mod book;
pub mod favorite;
pub mod featured;
pub mod verse;

pub use book::BibleBook;
pub use favorite::{FavoriteVerse, NewFavorite};
pub use featured::{FeaturedVerse, Theme};
pub use verse::{format_reference, format_share, Chapter, Verse, VerseKey};
