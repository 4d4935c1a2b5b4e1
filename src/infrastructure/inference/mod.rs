//! Inference endpoint adapters

mod http;
mod sagemaker;

pub use http::HttpEndpoint;
pub use sagemaker::SageMakerEndpoint;

use crate::application::ports::InferenceEndpoint;

/// Which endpoint a run talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointTarget {
    /// Plain HTTP POST to this URL
    Url(String),
    /// SageMaker runtime endpoint by name
    SageMaker {
        name: String,
        region: Option<String>,
        credentials: Option<(String, String)>,
    },
}

impl std::fmt::Display for EndpointTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::SageMaker { name, .. } => write!(f, "sagemaker:{}", name),
        }
    }
}

/// Build the adapter for `target`
pub async fn create_endpoint(target: &EndpointTarget) -> Box<dyn InferenceEndpoint> {
    match target {
        EndpointTarget::Url(url) => Box::new(HttpEndpoint::new(url.clone())),
        EndpointTarget::SageMaker {
            name,
            region,
            credentials,
        } => {
            let credentials = credentials
                .as_ref()
                .map(|(id, secret)| (id.as_str(), secret.as_str()));
            Box::new(SageMakerEndpoint::connect(name.clone(), region.as_deref(), credentials).await)
        }
    }
}
