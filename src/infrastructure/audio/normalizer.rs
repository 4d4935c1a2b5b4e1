//! WAV normalizer adapter

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use super::decoder::decode_to_pcm;
use super::wav::write_wav;
use crate::application::ports::{AudioNormalizer, NormalizeError, NormalizedAudio};
use crate::domain::audio::{AudioAsset, AudioFormat};

/// Prefix of the temporary WAV files; the basename becomes the upload key
const TEMP_PREFIX: &str = "accent-";

/// Normalizer that passes WAV through and decodes MP3/MP4 with symphonia
#[derive(Debug, Clone, Default)]
pub struct SymphoniaNormalizer {
    temp_dir: Option<PathBuf>,
}

impl SymphoniaNormalizer {
    /// Write temporary files to the system temp directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Write temporary files to `dir` instead
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: Some(dir.into()),
        }
    }

    fn create_temp_file(&self) -> Result<NamedTempFile, NormalizeError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(".wav");

        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        file.map_err(|e| NormalizeError::Io(e.to_string()))
    }

    fn normalize_blocking(
        &self,
        format: AudioFormat,
        data: &[u8],
    ) -> Result<NormalizedAudio, NormalizeError> {
        // Decode before touching the filesystem so a bad clip leaves nothing behind
        let decoded = match format {
            AudioFormat::Wav => None,
            AudioFormat::Mpeg | AudioFormat::Mp4 => Some(decode_to_pcm(data, format.extension())?),
        };

        let mut file = self.create_temp_file()?;

        match decoded {
            None => {
                file.write_all(data)
                    .and_then(|_| file.flush())
                    .map_err(|e| NormalizeError::Io(e.to_string()))?;
            }
            Some(clip) => {
                write_wav(&clip, BufWriter::new(file.as_file_mut()))
                    .map_err(|e| NormalizeError::Encode(e.to_string()))?;
            }
        }

        let normalized = NormalizedAudio::new(file.into_temp_path());
        tracing::debug!(
            path = %normalized.path().display(),
            source = %format,
            "Normalized audio to WAV"
        );
        Ok(normalized)
    }
}

#[async_trait]
impl AudioNormalizer for SymphoniaNormalizer {
    async fn normalize(&self, audio: &AudioAsset) -> Result<NormalizedAudio, NormalizeError> {
        let format = AudioFormat::from_mime(audio.mime_type())?;

        let this = self.clone();
        let data = audio.data().to_vec();

        tokio::task::spawn_blocking(move || this.normalize_blocking(format, &data))
            .await
            .map_err(|e| NormalizeError::Io(format!("Task join error: {}", e)))?
    }
}
