//! Application layer - Use cases and port interfaces
//!
//! Contains the conversion workflow and trait definitions
//! for external system interactions.

pub mod convert;
pub mod ports;

// Re-export use cases
pub use convert::{
    ConvertAccentUseCase, ConvertCallbacks, ConvertError, ConvertInput, ConvertOutput,
    InputSource,
};
