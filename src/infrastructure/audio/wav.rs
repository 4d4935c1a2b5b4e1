//! WAV encoding helpers
//!
//! Everything the endpoint receives is 16-bit PCM, mono unless the source
//! was already WAV and passed through untouched.

use std::io::{Cursor, Seek, Write};

/// Bits per sample for encoded WAV output
pub const BITS_PER_SAMPLE: u16 = 16;

/// Mono PCM ready for encoding
#[derive(Debug, Clone, PartialEq)]
pub struct PcmClip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl PcmClip {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

fn spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Encode a clip into any seekable writer
pub fn write_wav<W: Write + Seek>(clip: &PcmClip, writer: W) -> Result<(), hound::Error> {
    let mut wav = hound::WavWriter::new(writer, spec(clip.sample_rate))?;
    for &sample in &clip.samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()
}

/// Encode a clip into an in-memory WAV file
pub fn encode_wav(clip: &PcmClip) -> Result<Vec<u8>, hound::Error> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav(clip, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Average interleaved frames down to one channel
pub fn mix_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels as usize)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / frame.len() as i32) as i16
        })
        .collect()
}

/// Convert a float sample in [-1.0, 1.0] to 16-bit, clamping overshoot
pub fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}
