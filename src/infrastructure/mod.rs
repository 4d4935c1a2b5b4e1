//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with cpal, symphonia, S3, SageMaker and plain HTTP.

pub mod audio;
pub mod config;
pub mod fetch;
pub mod inference;
pub mod recording;
pub mod storage;

// Re-export adapters
pub use audio::{RodioPlayer, SymphoniaNormalizer};
pub use config::XdgConfigStore;
pub use fetch::HttpFetcher;
pub use inference::{create_endpoint, EndpointTarget, HttpEndpoint, SageMakerEndpoint};
pub use recording::CpalRecorder;
pub use storage::{S3ObjectStorage, S3Settings};
