//! Recording infrastructure module
//!
//! Microphone capture through cpal, packaged as mono WAV.

mod cpal_recorder;

pub use cpal_recorder::CpalRecorder;
