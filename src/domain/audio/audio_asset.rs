//! Audio asset value object

use std::fmt;
use std::path::Path;

use crate::domain::error::UnsupportedFormatError;

/// MIME type used when a file's type cannot be inferred
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

/// Container formats the normalizer knows how to turn into WAV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Wav,
    Mpeg,
    Mp4,
}

impl AudioFormat {
    /// Resolve a declared MIME type.
    ///
    /// Matching ignores ASCII case and any `;`-separated parameters, so
    /// `Audio/MPEG; charset=binary` resolves to [`AudioFormat::Mpeg`].
    pub fn from_mime(mime_type: &str) -> Result<Self, UnsupportedFormatError> {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Ok(Self::Wav),
            "audio/mpeg" | "audio/mp3" => Ok(Self::Mpeg),
            "audio/mp4" | "video/mp4" => Ok(Self::Mp4),
            _ => Err(UnsupportedFormatError {
                mime_type: mime_type.to_string(),
            }),
        }
    }

    /// Extension hint handed to the decoder probe
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mpeg => "mp3",
            Self::Mp4 => "mp4",
        }
    }

    /// Canonical MIME type for this format
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mpeg => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

/// Audio clip as acquired from the microphone or a local file.
///
/// The MIME type is kept exactly as declared; it is only interpreted when
/// the clip is normalized.
#[derive(Debug, Clone)]
pub struct AudioAsset {
    data: Vec<u8>,
    mime_type: String,
    sample_rate: Option<u32>,
    channels: Option<u16>,
}

impl AudioAsset {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
            sample_rate: None,
            channels: None,
        }
    }

    /// Attach PCM stream metadata (known for microphone recordings)
    pub fn with_stream_info(mut self, sample_rate: u32, channels: u16) -> Self {
        self.sample_rate = Some(sample_rate);
        self.channels = Some(channels);
        self
    }

    /// Guess a MIME type from a file extension
    pub fn mime_for_path(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("wav") => "audio/wav",
            Some("mp3") => "audio/mpeg",
            Some("mp4") | Some("m4a") => "audio/mp4",
            Some("ogg") => "audio/ogg",
            Some("flac") => "audio/flac",
            Some("webm") => "audio/webm",
            _ => MIME_OCTET_STREAM,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    pub fn channels(&self) -> Option<u16> {
        self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_mime_types() {
        assert_eq!(AudioFormat::from_mime("audio/wav"), Ok(AudioFormat::Wav));
        assert_eq!(AudioFormat::from_mime("audio/x-wav"), Ok(AudioFormat::Wav));
        assert_eq!(AudioFormat::from_mime("audio/mpeg"), Ok(AudioFormat::Mpeg));
        assert_eq!(AudioFormat::from_mime("audio/mp3"), Ok(AudioFormat::Mpeg));
        assert_eq!(AudioFormat::from_mime("audio/mp4"), Ok(AudioFormat::Mp4));
        assert_eq!(AudioFormat::from_mime("video/mp4"), Ok(AudioFormat::Mp4));
    }

    #[test]
    fn mime_matching_ignores_case_and_parameters() {
        assert_eq!(
            AudioFormat::from_mime("Audio/MPEG; charset=binary"),
            Ok(AudioFormat::Mpeg)
        );
    }

    #[test]
    fn unsupported_mime_keeps_original_string() {
        let err = AudioFormat::from_mime("audio/ogg").unwrap_err();
        assert_eq!(err.mime_type, "audio/ogg");
        assert!(err.to_string().contains("audio/ogg"));
    }

    #[test]
    fn mime_for_path_by_extension() {
        assert_eq!(AudioAsset::mime_for_path(Path::new("a.WAV")), "audio/wav");
        assert_eq!(AudioAsset::mime_for_path(Path::new("a.mp3")), "audio/mpeg");
        assert_eq!(AudioAsset::mime_for_path(Path::new("a.m4a")), "audio/mp4");
        assert_eq!(AudioAsset::mime_for_path(Path::new("a.ogg")), "audio/ogg");
        assert_eq!(AudioAsset::mime_for_path(Path::new("noext")), MIME_OCTET_STREAM);
    }

    #[test]
    fn stream_info_is_optional() {
        let asset = AudioAsset::new(vec![0u8; 4], "audio/wav");
        assert_eq!(asset.sample_rate(), None);

        let asset = asset.with_stream_info(16_000, 1);
        assert_eq!(asset.sample_rate(), Some(16_000));
        assert_eq!(asset.channels(), Some(1));
    }

    #[test]
    fn human_readable_size() {
        assert_eq!(AudioAsset::new(vec![0u8; 500], "audio/wav").human_readable_size(), "500 B");
        assert_eq!(AudioAsset::new(vec![0u8; 2048], "audio/wav").human_readable_size(), "2.0 KB");
        assert_eq!(
            AudioAsset::new(vec![0u8; 2 * 1024 * 1024], "audio/wav").human_readable_size(),
            "2.0 MB"
        );
    }
}
