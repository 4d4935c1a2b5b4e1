//! Object storage adapters

mod s3;

pub use s3::{S3ObjectStorage, S3Settings};
