//! Inference request envelope and response unwrapping

use serde::Serialize;

use super::accent::Accent;
use super::object_uri::{ObjectUri, S3_SCHEME};
use crate::domain::error::ObjectUriError;

/// JSON body sent to the inference endpoint:
/// `{"audio_url": "s3://...", "language": "en-us"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    #[serde(rename = "audio_url")]
    audio_uri: ObjectUri,
    #[serde(rename = "language")]
    accent: Accent,
}

impl ConversionRequest {
    pub fn new(audio_uri: ObjectUri, accent: Accent) -> Self {
        Self { audio_uri, accent }
    }

    pub fn audio_uri(&self) -> &ObjectUri {
        &self.audio_uri
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    /// Serialize to the wire format
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Normalize a raw endpoint response body.
///
/// Trims surrounding whitespace and removes one layer of surrounding double
/// quotes. Some model servers return the result JSON-encoded as a string;
/// this is a compatibility shim for them rather than part of the protocol.
pub fn unwrap_endpoint_response(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Interpret an unwrapped endpoint response as the location of the result.
pub fn parse_result_uri(response: &str) -> Result<ObjectUri, ObjectUriError> {
    if !response.starts_with(S3_SCHEME) {
        return Err(ObjectUriError::MissingScheme(response.to_string()));
    }
    ObjectUri::parse(response)
}
