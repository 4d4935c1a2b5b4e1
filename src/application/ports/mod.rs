//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod fetcher;
pub mod inference;
pub mod normalizer;
pub mod player;
pub mod recorder;
pub mod storage;

// Re-export common types
pub use config::ConfigStore;
pub use fetcher::{FetchError, ResultFetcher};
pub use inference::{InferenceEndpoint, InvocationError};
pub use normalizer::{AudioNormalizer, NormalizeError, NormalizedAudio};
pub use player::{AudioPlayer, PlaybackError};
pub use recorder::{AudioRecorder, ProgressCallback, RecordingError};
pub use storage::{ObjectStorage, StorageError, PRESIGN_EXPIRY};
