//! Accent Convert - voice accent conversion CLI
//!
//! Records or loads a voice clip, normalizes it to WAV, uploads it to S3,
//! asks a hosted model to re-voice it in the chosen accent, and downloads
//! the converted clip through a signed URL.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (accent, object URI, audio asset), the stage
//!   machine, and errors
//! - **Application**: The conversion use case and port interfaces (traits)
//! - **Infrastructure**: Adapters for cpal, symphonia/hound, S3, SageMaker,
//!   plain HTTP, rodio and the XDG config file
//! - **CLI**: Argument parsing, config commands, logging and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
