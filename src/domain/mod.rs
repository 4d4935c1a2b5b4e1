//! Domain layer - Core business logic
//!
//! Contains value objects, the pipeline state machine, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod conversion;
pub mod error;
pub mod recording;

// Re-export common types
pub use audio::{AudioAsset, AudioFormat};
pub use config::AppConfig;
pub use conversion::{Accent, ConversionRequest, ConversionSession, ConversionStage, ObjectUri};
pub use error::*;
pub use recording::Duration;
