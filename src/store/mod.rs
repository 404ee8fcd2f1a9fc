pub mod sqlite;

use crate::app::Result;

pub use sqlite::SqliteStore;

/// Durable string-keyed slots. Each read or write replaces a whole value.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
