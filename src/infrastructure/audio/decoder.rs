//! Compressed audio decoding via symphonia
//!
//! Handles MP3 streams and the audio track of MP4 containers. Output is
//! mono 16-bit PCM at the source sample rate.

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::wav::{f32_to_i16, PcmClip};
use crate::application::ports::NormalizeError;

/// Decode an encoded clip to mono PCM.
///
/// `extension` is a probe hint (`mp3`, `mp4`); the container is still
/// sniffed from the bytes.
pub fn decode_to_pcm(data: &[u8], extension: &str) -> Result<PcmClip, NormalizeError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    hint.with_extension(extension);

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| NormalizeError::Decode(format!("probe: {}", e)))?;

    let mut format = probed.format;

    // MP4 files may carry video tracks; take the first one with a known audio codec
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| NormalizeError::Decode("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| NormalizeError::Decode(format!("codec: {}", e)))?;

    let mut sample_rate = codec_params.sample_rate.unwrap_or(0);
    let mut samples: Vec<i16> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(NormalizeError::Decode(format!("packet: {}", e))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => return Err(NormalizeError::Decode(format!("decode: {}", e))),
        };

        let spec = *decoded.spec();
        let frames = decoded.frames();
        if frames == 0 {
            continue;
        }
        if sample_rate == 0 {
            sample_rate = spec.rate;
        }

        let channels = spec.channels.count().max(1);
        let mut buffer = SampleBuffer::<f32>::new(frames as u64, spec);
        buffer.copy_interleaved_ref(decoded);

        for frame in buffer.samples().chunks(channels) {
            let mono = frame.iter().sum::<f32>() / channels as f32;
            samples.push(f32_to_i16(mono));
        }
    }

    if samples.is_empty() || sample_rate == 0 {
        return Err(NormalizeError::Decode(
            "no audio samples decoded".to_string(),
        ));
    }

    let clip = PcmClip {
        samples,
        sample_rate,
    };

    tracing::debug!(
        sample_rate = clip.sample_rate,
        duration_secs = clip.duration_secs(),
        "Decoded audio to mono PCM"
    );

    Ok(clip)
}
