//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 30s, 1m, 2m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown accent is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid accent: \"{input}\". Valid accents are: british (en-br), american (en-us)")]
pub struct InvalidAccentError {
    pub input: String,
}

/// Error when a declared audio type cannot be normalized to WAV
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported audio format: {mime_type}")]
pub struct UnsupportedFormatError {
    pub mime_type: String,
}

/// Error when an object-store URI is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectUriError {
    #[error("Expected an s3:// URI, got \"{0}\"")]
    MissingScheme(String),

    #[error("Object URI \"{0}\" has no bucket")]
    EmptyBucket(String),

    #[error("Object URI \"{0}\" has no object key")]
    EmptyKey(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Missing required setting '{key}'. Set {env} or run 'accent-convert config set {key} <value>'")]
    Missing { key: &'static str, env: &'static str },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
