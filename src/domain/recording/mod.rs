//! Recording domain module

mod duration;

pub use duration::{Duration, DEFAULT_MAX_RECORDING_SECS};
