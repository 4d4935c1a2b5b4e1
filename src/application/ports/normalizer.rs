//! Format normalization port interface

use std::path::Path;

use async_trait::async_trait;
use tempfile::TempPath;
use thiserror::Error;

use crate::domain::audio::AudioAsset;
use crate::domain::error::UnsupportedFormatError;

/// Normalization errors
#[derive(Debug, Clone, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error("Failed to decode audio: {0}")]
    Decode(String),

    #[error("Failed to encode WAV: {0}")]
    Encode(String),

    #[error("Failed to write temporary file: {0}")]
    Io(String),
}

/// A WAV file in a temporary location. The file is deleted on drop.
#[derive(Debug)]
pub struct NormalizedAudio {
    path: TempPath,
}

impl NormalizedAudio {
    pub fn new(path: TempPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Basename of the temporary file, used to derive the upload key
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Port for turning an acquired clip into a WAV file
#[async_trait]
pub trait AudioNormalizer: Send + Sync {
    /// Write a fresh WAV rendition of `audio` to a temporary file.
    ///
    /// Unsupported types fail before anything is written. The source clip
    /// is never modified, so a failed attempt can be retried.
    async fn normalize(&self, audio: &AudioAsset) -> Result<NormalizedAudio, NormalizeError>;
}
