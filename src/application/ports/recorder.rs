//! Recording port interface

use async_trait::async_trait;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::audio::AudioAsset;
use crate::domain::recording::Duration;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),

    #[error("Failed to encode recording: {0}")]
    EncodeFailed(String),

    #[error("No audio device available")]
    NoAudioDevice,
}

/// Progress callback type for reporting recording progress.
/// Parameters: (elapsed_ms, max_ms)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Port for interactive microphone capture
#[async_trait]
pub trait AudioRecorder: Send + Sync {
    /// Record until `stop` is raised or `max_duration` elapses.
    ///
    /// Returns a WAV clip. An empty clip is returned as-is; the caller
    /// decides whether that counts as missing input.
    async fn record(
        &self,
        max_duration: Duration,
        stop: Arc<AtomicBool>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<AudioAsset, RecordingError>;
}
