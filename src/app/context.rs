use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::api::BibleClient;
use crate::app::error::{OpenBibleError, Result};
use crate::config::Config;
use crate::favorites::Favorites;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::store::sqlite::SqliteStore;

pub struct AppContext {
    pub store: Arc<SqliteStore>,
    pub favorites: Favorites<SqliteStore>,
    pub bible: BibleClient,
    pub config: Config,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        tracing::debug!("Opening favorites store at {}", db_path.display());
        Self::with_store(Arc::new(SqliteStore::new(&db_path)?), config)
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        Self::with_store(Arc::new(SqliteStore::in_memory()?), config)
    }

    fn with_store(store: Arc<SqliteStore>, config: Config) -> Result<Self> {
        let timeout = config.api.timeout_secs.map(Duration::from_secs);
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(timeout)?);
        let bible = BibleClient::new(fetcher, &config.api.base_url)?
            .with_translation(config.api.translation.clone());

        Ok(Self {
            favorites: Favorites::new(store.clone()),
            store,
            bible,
            config,
        })
    }

    /// `<data dir>/openbible/openbible.db`, creating the directory.
    pub fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| OpenBibleError::Config("Could not find data directory".into()))?;
        let app_dir = data_dir.join("openbible");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("openbible.db"))
    }
}
