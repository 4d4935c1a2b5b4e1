//! Audio infrastructure module
//!
//! WAV encoding (hound), MP3/MP4 decoding (symphonia) and playback (rodio).

mod decoder;
mod normalizer;
mod rodio_player;
pub mod wav;

pub use decoder::decode_to_pcm;
pub use normalizer::SymphoniaNormalizer;
pub use rodio_player::RodioPlayer;
pub use wav::{encode_wav, PcmClip};
