//! Result download port interface

use async_trait::async_trait;
use thiserror::Error;

/// Download errors
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Download failed: {0}")]
    RequestFailed(String),

    #[error("Download returned HTTP {0}")]
    Status(u16),

    #[error("Failed to read download body: {0}")]
    Body(String),
}

/// Port for fetching bytes behind a signed URL
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
