//! Accent conversion domain module

mod accent;
mod object_uri;
mod request;
mod session;

pub use accent::Accent;
pub use object_uri::{ObjectUri, INPUT_KEY_PREFIX, S3_SCHEME};
pub use request::{parse_result_uri, unwrap_endpoint_response, ConversionRequest};
pub use session::{ConversionSession, ConversionStage, InvalidStageTransition};
