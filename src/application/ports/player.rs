//! Playback port interface

use async_trait::async_trait;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("Audio output device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Failed to decode audio for playback: {0}")]
    Decode(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for playing a finished clip on the local machine
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play encoded audio (WAV) to completion
    async fn play(&self, audio: Vec<u8>) -> Result<(), PlaybackError>;
}
