//! S3 object storage adapter backed by `object_store`

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as StorePath;
use object_store::signer::Signer;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ObjectStorage, StorageError};
use crate::domain::conversion::ObjectUri;

/// Connection settings shared by every bucket the adapter touches
#[derive(Debug, Clone, Default)]
pub struct S3Settings {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

/// S3 storage.
///
/// The result bucket is chosen by the endpoint, so a client is built per
/// bucket instead of once up front.
pub struct S3ObjectStorage {
    settings: S3Settings,
}

impl S3ObjectStorage {
    pub fn new(settings: S3Settings) -> Self {
        Self { settings }
    }

    /// Settings missing here fall back to the standard `AWS_*` variables
    fn store_for(&self, bucket: &str) -> Result<Arc<AmazonS3>, StorageError> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);

        if let Some(region) = &self.settings.region {
            builder = builder.with_region(region);
        }
        if let (Some(id), Some(secret)) = (
            &self.settings.access_key_id,
            &self.settings.secret_access_key,
        ) {
            builder = builder
                .with_access_key_id(id)
                .with_secret_access_key(secret);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        Ok(Arc::new(store))
    }
}

/// Address the object under exactly its key.
///
/// `StorePath::from` would percent-encode or drop segments and silently
/// point at a different object, so keys it cannot keep verbatim are refused.
fn store_path(object: &ObjectUri) -> Result<StorePath, String> {
    let path = StorePath::parse(object.key()).map_err(|e| e.to_string())?;
    if path.as_ref() != object.key() {
        return Err(format!(
            "object key \"{}\" cannot be addressed exactly",
            object.key()
        ));
    }
    Ok(path)
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn upload(&self, path: &Path, target: &ObjectUri) -> Result<(), StorageError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| StorageError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let size = bytes.len();

        let key = store_path(target).map_err(|message| StorageError::UploadFailed {
            uri: target.to_string(),
            message,
        })?;
        let store = self.store_for(target.bucket())?;
        store
            .put(&key, PutPayload::from(bytes))
            .await
            .map_err(|e| StorageError::UploadFailed {
                uri: target.to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(uri = %target, bytes = size, "Uploaded input audio");
        Ok(())
    }

    async fn presign_get(
        &self,
        object: &ObjectUri,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let key = store_path(object).map_err(|message| StorageError::PresignFailed {
            uri: object.to_string(),
            message,
        })?;
        let store = self.store_for(object.bucket())?;
        let url = store
            .signed_url(reqwest::Method::GET, &key, expires_in)
            .await
            .map_err(|e| StorageError::PresignFailed {
                uri: object.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(uri = %object, expires_secs = expires_in.as_secs(), "Signed result URL");
        Ok(url.to_string())
    }
}
