//! Chapter and passage lookups against the scripture API.
//!
//! Every failure (transport, status, malformed body) is logged and turned
//! into `None`; callers only decide how to tell the user.

use std::sync::Arc;

use url::Url;

use crate::app::{OpenBibleError, Result};
use crate::domain::Chapter;
use crate::fetcher::Fetcher;
use crate::normalizer::{ApiResponse, Normalizer};

pub const DEFAULT_BASE_URL: &str = "https://bible-api.com";

#[derive(Clone)]
pub struct BibleClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
    base_url: Url,
    translation: Option<String>,
}

impl BibleClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(OpenBibleError::Config(format!(
                "API base URL cannot take a path: {}",
                base_url
            )));
        }

        Ok(Self {
            fetcher,
            normalizer: Normalizer::new(),
            base_url,
            translation: None,
        })
    }

    pub fn with_translation(mut self, translation: Option<String>) -> Self {
        self.translation = translation.filter(|t| !t.trim().is_empty());
        self
    }

    /// Fetches one chapter, e.g. `("john", 3)` requests `{base}/john3`.
    pub async fn fetch_chapter(&self, book_id: &str, chapter: u32) -> Option<Chapter> {
        match self.try_fetch_chapter(book_id, chapter).await {
            Ok(chapter) => Some(chapter),
            Err(e) => {
                tracing::error!("Error fetching {} {}: {}", book_id, chapter, e);
                None
            }
        }
    }

    /// Looks up a passage by reference string such as `John 3:16`.
    ///
    /// The query is used verbatim as a path segment; the API has no keyword
    /// search, so anything that is not a reference fails upstream.
    pub async fn search_verses(&self, query: &str) -> Option<ApiResponse> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        match self.try_search(query).await {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::error!("Error searching for \"{}\": {}", query, e);
                None
            }
        }
    }

    async fn try_fetch_chapter(&self, book_id: &str, chapter: u32) -> Result<Chapter> {
        let url = self.endpoint(&format!("{}{}", book_id, chapter))?;
        let body = self.fetcher.fetch(url.as_str()).await?;
        self.normalizer.normalize_chapter(book_id, chapter, &body)
    }

    async fn try_search(&self, query: &str) -> Result<ApiResponse> {
        let url = self.endpoint(query)?;
        let body = self.fetcher.fetch(url.as_str()).await?;
        self.normalizer.parse(&body)
    }

    fn endpoint(&self, segment: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| OpenBibleError::Other(format!("Base URL has no path: {}", self.base_url)))?
            .pop_if_empty()
            .push(segment);

        if let Some(translation) = &self.translation {
            url.query_pairs_mut().append_pair("translation", translation);
        }

        Ok(url)
    }
}
