//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const FIXTURE_RATE: u32 = 16_000;

/// Mono 16-bit sine clip of `secs` seconds
pub fn wav_bytes(secs: u32, sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..(secs * sample_rate) {
            let t = i as f32 / sample_rate as f32;
            let sample = (t * 440.0 * std::f32::consts::TAU).sin() * 0.25;
            writer.write_sample((sample * i16::MAX as f32) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

pub fn write_wav(dir: &Path, name: &str, secs: u32) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, wav_bytes(secs, FIXTURE_RATE)).unwrap();
    path
}

/// Silent MPEG-1 Layer III stream: 128 kbit/s, 44.1 kHz, mono.
///
/// Every frame has zeroed side info and main data, which decodes to
/// 1152 samples of silence.
pub fn mp3_silence(frames: usize) -> Vec<u8> {
    const FRAME_LEN: usize = 144 * 128_000 / 44_100;
    let mut data = Vec::with_capacity(frames * FRAME_LEN);
    for _ in 0..frames {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0xC0]);
        data.extend_from_slice(&frame);
    }
    data
}

/// Read back a WAV file, returning (spec, sample count)
pub fn read_wav(path: &Path) -> (hound::WavSpec, u32) {
    let reader = hound::WavReader::open(path).unwrap();
    (reader.spec(), reader.len())
}

/// One silent AAC-LC raw frame for a mono stream: a single channel element
/// with no scale factor bands, followed by the terminator.
const AAC_SILENT_FRAME: [u8; 4] = [0x01, 0x40, 0x20, 0x07];
const AAC_FRAME_SAMPLES: u32 = 1024;
pub const AAC_RATE: u32 = 44_100;

fn atom(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(&(8 + payload.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(payload);
    out
}

/// Version 0 full box
fn full_atom(kind: &[u8; 4], flags: u32, payload: &[u8]) -> Vec<u8> {
    let mut body = (flags & 0x00FF_FFFF).to_be_bytes().to_vec();
    body.extend_from_slice(payload);
    atom(kind, &body)
}

fn concat(parts: &[Vec<u8>]) -> Vec<u8> {
    parts.concat()
}

fn be32(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

fn tkhd(track_id: u32, duration: u32, volume: u16) -> Vec<u8> {
    let mut body = be32(&[0, 0, track_id, 0, duration, 0, 0]);
    body.extend_from_slice(&[0, 0, 0, 0]); // layer, alternate group
    body.extend_from_slice(&volume.to_be_bytes());
    body.extend_from_slice(&[0, 0]);
    body.extend_from_slice(&be32(&[0x0001_0000, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000]));
    body.extend_from_slice(&be32(&[0, 0])); // width, height
    full_atom(b"tkhd", 0x3, &body)
}

fn mdhd(timescale: u32, duration: u32) -> Vec<u8> {
    let mut body = be32(&[0, 0, timescale, duration]);
    body.extend_from_slice(&[0x55, 0xC4, 0, 0]); // "und", quality
    full_atom(b"mdhd", 0, &body)
}

fn hdlr(handler: &[u8; 4]) -> Vec<u8> {
    let mut body = vec![0u8; 4];
    body.extend_from_slice(handler);
    body.extend_from_slice(&[0u8; 12]);
    body.push(0); // empty name
    full_atom(b"hdlr", 0, &body)
}

fn stsd(entry: Vec<u8>) -> Vec<u8> {
    let mut body = be32(&[1]);
    body.extend_from_slice(&entry);
    full_atom(b"stsd", 0, &body)
}

/// Timed-text track with no samples
fn text_trak() -> Vec<u8> {
    let mut tx3g = vec![0u8; 6];
    tx3g.extend_from_slice(&1u16.to_be_bytes());
    let stbl = atom(
        b"stbl",
        &concat(&[
            stsd(atom(b"tx3g", &tx3g)),
            full_atom(b"stts", 0, &be32(&[0])),
            full_atom(b"stsc", 0, &be32(&[0])),
            full_atom(b"stsz", 0, &be32(&[0, 0])),
            full_atom(b"stco", 0, &be32(&[0])),
        ]),
    );
    let minf = atom(b"minf", &concat(&[full_atom(b"nmhd", 0, &[]), stbl]));
    let mdia = atom(b"mdia", &concat(&[mdhd(1000, 0), hdlr(b"text"), minf]));
    atom(b"trak", &concat(&[tkhd(1, 0, 0), mdia]))
}

/// AAC-LC sample entry: mono, 16-bit, 44.1 kHz, with its elementary stream descriptor
fn mp4a_entry() -> Vec<u8> {
    // AudioSpecificConfig: object type 2 (LC), rate index 4 (44.1 kHz), one channel
    let asc = [0x12, 0x08];

    let mut decoder_config = vec![0x40, 0x15, 0, 0, 0];
    decoder_config.extend_from_slice(&be32(&[0, 0]));
    decoder_config.extend_from_slice(&[0x05, asc.len() as u8]);
    decoder_config.extend_from_slice(&asc);

    let mut es = vec![0x00, 0x01, 0x00];
    es.extend_from_slice(&[0x04, decoder_config.len() as u8]);
    es.extend_from_slice(&decoder_config);
    es.extend_from_slice(&[0x06, 0x01, 0x02]);

    let mut descriptor = vec![0x03, es.len() as u8];
    descriptor.extend_from_slice(&es);

    let mut body = vec![0u8; 6];
    body.extend_from_slice(&1u16.to_be_bytes()); // data reference index
    body.extend_from_slice(&[0u8; 8]); // version, revision, vendor
    body.extend_from_slice(&1u16.to_be_bytes()); // channels
    body.extend_from_slice(&16u16.to_be_bytes()); // sample size
    body.extend_from_slice(&[0u8; 4]);
    body.extend_from_slice(&(AAC_RATE << 16).to_be_bytes());
    body.extend_from_slice(&full_atom(b"esds", 0, &descriptor));
    atom(b"mp4a", &body)
}

fn audio_trak(frames: u32, chunk_offset: u32) -> Vec<u8> {
    let duration = frames * AAC_FRAME_SAMPLES;
    let stbl = atom(
        b"stbl",
        &concat(&[
            stsd(mp4a_entry()),
            full_atom(b"stts", 0, &be32(&[1, frames, AAC_FRAME_SAMPLES])),
            full_atom(b"stsc", 0, &be32(&[1, 1, frames, 1])),
            full_atom(
                b"stsz",
                0,
                &be32(&[AAC_SILENT_FRAME.len() as u32, frames]),
            ),
            full_atom(b"stco", 0, &be32(&[1, chunk_offset])),
        ]),
    );
    let minf = atom(b"minf", &concat(&[full_atom(b"smhd", 0, &[0; 4]), stbl]));
    let mdia = atom(
        b"mdia",
        &concat(&[mdhd(AAC_RATE, duration), hdlr(b"soun"), minf]),
    );
    atom(b"trak", &concat(&[tkhd(2, duration, 0x0100), mdia]))
}

/// MP4 holding a timed-text track followed by a silent mono AAC-LC track.
///
/// Layout is `ftyp`, `mdat`, `moov`; every AAC frame sits in one chunk.
pub fn mp4_aac_silence(frames: u32) -> Vec<u8> {
    let ftyp = atom(b"ftyp", b"isom\0\0\x02\0isommp41");
    let payload = AAC_SILENT_FRAME.repeat(frames as usize);
    let mdat = atom(b"mdat", &payload);
    let chunk_offset = (ftyp.len() + 8) as u32;

    let mut mvhd = be32(&[0, 0, 1000, frames * AAC_FRAME_SAMPLES * 1000 / AAC_RATE]);
    mvhd.extend_from_slice(&be32(&[0x0001_0000]));
    mvhd.extend_from_slice(&[0x01, 0x00]);
    mvhd.extend_from_slice(&[0u8; 10]);
    mvhd.extend_from_slice(&be32(&[0x0001_0000, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000]));
    mvhd.extend_from_slice(&[0u8; 24]);
    mvhd.extend_from_slice(&be32(&[3]));

    let moov = atom(
        b"moov",
        &concat(&[
            full_atom(b"mvhd", 0, &mvhd),
            text_trak(),
            audio_trak(frames, chunk_offset),
        ]),
    );

    concat(&[ftyp, mdat, moov])
}
