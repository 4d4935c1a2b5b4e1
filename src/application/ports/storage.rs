//! Object storage port interface

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversion::ObjectUri;

/// Lifetime of signed retrieval URLs
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(3600);

/// Object storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Object store is misconfigured: {0}")]
    Configuration(String),

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to upload to {uri}: {message}")]
    UploadFailed { uri: String, message: String },

    #[error("Failed to sign URL for {uri}: {message}")]
    PresignFailed { uri: String, message: String },
}

/// Port for the remote bucket holding input and output clips
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a local file to `target`
    async fn upload(&self, path: &Path, target: &ObjectUri) -> Result<(), StorageError>;

    /// Produce a credential-free GET URL for `object`, valid for `expires_in`
    async fn presign_get(
        &self,
        object: &ObjectUri,
        expires_in: Duration,
    ) -> Result<String, StorageError>;
}
