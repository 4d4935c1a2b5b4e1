//! Audio domain module

mod audio_asset;

pub use audio_asset::{AudioAsset, AudioFormat, MIME_OCTET_STREAM};
