pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Transport seam for the scripture API.
///
/// Implementations return the raw response body on a 2xx status and an
/// error for anything else.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
