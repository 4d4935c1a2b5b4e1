//! Plain HTTP inference endpoint
//!
//! For model servers reachable directly (a local container, a gateway in
//! front of SageMaker). The request body is the same JSON envelope.

use async_trait::async_trait;

use crate::application::ports::{InferenceEndpoint, InvocationError};
use crate::domain::conversion::ConversionRequest;

pub struct HttpEndpoint {
    url: String,
    client: reqwest::Client,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl InferenceEndpoint for HttpEndpoint {
    async fn invoke(&self, request: &ConversionRequest) -> Result<String, InvocationError> {
        let body = request
            .to_json()
            .map_err(|e| InvocationError::Serialize(e.to_string()))?;

        tracing::debug!(url = %self.url, accent = %request.accent(), "Invoking HTTP endpoint");

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| InvocationError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InvocationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| InvocationError::RequestFailed(e.to_string()))?;

        String::from_utf8(bytes.to_vec()).map_err(|e| InvocationError::InvalidEncoding(e.to_string()))
    }
}
