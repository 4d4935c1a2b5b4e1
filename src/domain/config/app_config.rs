//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::conversion::Accent;
use crate::domain::recording::Duration;

/// Default file name for the downloaded result
pub const DEFAULT_OUTPUT_FILE: &str = "converted_voice.wav";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub region: Option<String>,
    /// SageMaker endpoint name
    pub endpoint_name: Option<String>,
    /// Plain HTTP endpoint; takes precedence over `endpoint_name` when set
    pub endpoint_url: Option<String>,
    /// Bucket receiving uploaded input clips
    pub bucket: Option<String>,
    pub accent: Option<String>,
    pub output: Option<String>,
    pub max_duration: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            accent: Some(Accent::default().to_string()),
            output: Some(DEFAULT_OUTPUT_FILE.to_string()),
            max_duration: Some(Duration::default_max_recording().to_string()),
            ..Self::default()
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            aws_access_key_id: other.aws_access_key_id.or(self.aws_access_key_id),
            aws_secret_access_key: other.aws_secret_access_key.or(self.aws_secret_access_key),
            region: other.region.or(self.region),
            endpoint_name: other.endpoint_name.or(self.endpoint_name),
            endpoint_url: other.endpoint_url.or(self.endpoint_url),
            bucket: other.bucket.or(self.bucket),
            accent: other.accent.or(self.accent),
            output: other.output.or(self.output),
            max_duration: other.max_duration.or(self.max_duration),
        }
    }

    /// Get the output file path, or `converted_voice.wav`
    pub fn output_or_default(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    /// Static credentials, only when both halves are present
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.aws_access_key_id, &self.aws_secret_access_key) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some((id.as_str(), secret.as_str()))
            }
            _ => None,
        }
    }
}
