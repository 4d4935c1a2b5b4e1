//! Inference endpoint port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversion::ConversionRequest;

/// Invocation errors
#[derive(Debug, Clone, Error)]
pub enum InvocationError {
    #[error("Failed to encode request: {0}")]
    Serialize(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Endpoint error: {0}")]
    Service(String),

    #[error("Response body is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Port for the remote accent conversion model
#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    /// Send one request and return the raw response body.
    ///
    /// Exactly one attempt is made; retrying is left to the user.
    async fn invoke(&self, request: &ConversionRequest) -> Result<String, InvocationError>;
}

#[async_trait]
impl InferenceEndpoint for Box<dyn InferenceEndpoint> {
    async fn invoke(&self, request: &ConversionRequest) -> Result<String, InvocationError> {
        (**self).invoke(request).await
    }
}
