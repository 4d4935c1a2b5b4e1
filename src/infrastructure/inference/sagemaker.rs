//! SageMaker runtime inference endpoint

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sagemakerruntime::config::Credentials;
use aws_sdk_sagemakerruntime::error::DisplayErrorContext;
use aws_sdk_sagemakerruntime::primitives::Blob;
use aws_sdk_sagemakerruntime::Client;

use crate::application::ports::{InferenceEndpoint, InvocationError};
use crate::domain::conversion::ConversionRequest;

/// Provider name attached to statically configured credentials
const CREDENTIALS_PROVIDER: &str = "accent-convert";

pub struct SageMakerEndpoint {
    endpoint_name: String,
    client: Client,
}

impl SageMakerEndpoint {
    /// Build a client from the default AWS chain, overridden by any
    /// region or static key pair given here
    pub async fn connect(
        endpoint_name: impl Into<String>,
        region: Option<&str>,
        credentials: Option<(&str, &str)>,
    ) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        if let Some((id, secret)) = credentials {
            loader = loader.credentials_provider(Credentials::new(
                id,
                secret,
                None,
                None,
                CREDENTIALS_PROVIDER,
            ));
        }

        let sdk_config = loader.load().await;

        Self {
            endpoint_name: endpoint_name.into(),
            client: Client::new(&sdk_config),
        }
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }
}

#[async_trait]
impl InferenceEndpoint for SageMakerEndpoint {
    async fn invoke(&self, request: &ConversionRequest) -> Result<String, InvocationError> {
        let body = request
            .to_json()
            .map_err(|e| InvocationError::Serialize(e.to_string()))?;

        tracing::debug!(
            endpoint = %self.endpoint_name,
            accent = %request.accent(),
            "Invoking SageMaker endpoint"
        );

        let output = self
            .client
            .invoke_endpoint()
            .endpoint_name(&self.endpoint_name)
            .content_type("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| InvocationError::Service(DisplayErrorContext(&e).to_string()))?;

        response_text(output.body().map(|blob| blob.as_ref()))
    }
}

/// A missing body is an endpoint failure, not an empty success
fn response_text(body: Option<&[u8]>) -> Result<String, InvocationError> {
    let bytes = body.ok_or_else(|| InvocationError::Service("empty response body".to_string()))?;
    String::from_utf8(bytes.to_vec()).map_err(|e| InvocationError::InvalidEncoding(e.to_string()))
}
