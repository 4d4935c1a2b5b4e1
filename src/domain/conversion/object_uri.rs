//! Object-store URI value object

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::error::ObjectUriError;

/// Scheme prefix of object-store URIs
pub const S3_SCHEME: &str = "s3://";

/// Prefix under which input clips are uploaded
pub const INPUT_KEY_PREFIX: &str = "input-audio/";

/// Address of a blob in remote storage: `s3://<bucket>/<key>`.
///
/// The bucket is the first path segment; everything after the first `/`
/// is the key, so keys may themselves contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUri {
    bucket: String,
    key: String,
}

impl ObjectUri {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Location for an uploaded input clip: `input-audio/<file_name>`
    pub fn for_input(bucket: impl Into<String>, file_name: &str) -> Self {
        Self::new(bucket, format!("{}{}", INPUT_KEY_PREFIX, file_name))
    }

    /// Parse an `s3://bucket/key` string
    pub fn parse(input: &str) -> Result<Self, ObjectUriError> {
        let rest = input
            .strip_prefix(S3_SCHEME)
            .ok_or_else(|| ObjectUriError::MissingScheme(input.to_string()))?;

        let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));

        if bucket.is_empty() {
            return Err(ObjectUriError::EmptyBucket(input.to_string()));
        }
        if key.is_empty() {
            return Err(ObjectUriError::EmptyKey(input.to_string()));
        }

        Ok(Self::new(bucket, key))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for ObjectUri {
    type Err = ObjectUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", S3_SCHEME, self.bucket, self.key)
    }
}

impl Serialize for ObjectUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
