//! Cross-platform microphone recorder using cpal
//!
//! Captures the default input device at its preferred rate, mixes down to
//! mono 16-bit and packages the result as WAV. No resampling is done; the
//! WAV header carries the device rate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Instant;

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, StreamConfig};
use tokio::time::{interval, Duration as TokioDuration};

use crate::application::ports::{AudioRecorder, ProgressCallback, RecordingError};
use crate::domain::audio::AudioAsset;
use crate::domain::recording::Duration;
use crate::infrastructure::audio::wav::{encode_wav, f32_to_i16, mix_to_mono, PcmClip};

/// How often the capture thread checks the stop flag
const POLL_INTERVAL_MS: u64 = 50;

/// Audio recorder using cpal.
///
/// The stream lives on a blocking thread because `cpal::Stream` is not `Send`.
pub struct CpalRecorder {
    /// Recorded audio samples (mono, i16, at device sample rate)
    audio_buffer: Arc<StdMutex<Vec<i16>>>,
    /// Recording state
    is_recording: Arc<AtomicBool>,
}

impl CpalRecorder {
    pub fn new() -> Self {
        Self {
            audio_buffer: Arc::new(StdMutex::new(Vec::new())),
            is_recording: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    fn get_input_device() -> Result<cpal::Device, RecordingError> {
        let host = cpal::default_host();
        host.default_input_device()
            .ok_or(RecordingError::NoAudioDevice)
    }

    /// Use the device's default config when it is i16 or f32
    fn get_input_config(
        device: &cpal::Device,
    ) -> Result<(StreamConfig, SampleFormat), RecordingError> {
        let default = device
            .default_input_config()
            .map_err(|e| RecordingError::StartFailed(format!("Failed to get config: {}", e)))?;

        let sample_format = default.sample_format();
        if sample_format != SampleFormat::I16 && sample_format != SampleFormat::F32 {
            return Err(RecordingError::StartFailed(format!(
                "Unsupported sample format: {:?}",
                sample_format
            )));
        }

        Ok((default.config(), sample_format))
    }

    fn build_stream(
        device: &cpal::Device,
        config: &StreamConfig,
        sample_format: SampleFormat,
        buffer: Arc<StdMutex<Vec<i16>>>,
        is_recording: Arc<AtomicBool>,
    ) -> Result<cpal::Stream, RecordingError> {
        let channels = config.channels;
        let on_error = |err| tracing::error!(error = %err, "Audio stream error");

        let stream = match sample_format {
            SampleFormat::I16 => device.build_input_stream(
                config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    if is_recording.load(Ordering::SeqCst) {
                        let mono = mix_to_mono(data, channels);
                        if let Ok(mut buffer) = buffer.lock() {
                            buffer.extend_from_slice(&mono);
                        }
                    }
                },
                on_error,
                None,
            ),
            SampleFormat::F32 => device.build_input_stream(
                config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if is_recording.load(Ordering::SeqCst) {
                        let pcm: Vec<i16> = data.iter().map(|&s| f32_to_i16(s)).collect();
                        let mono = mix_to_mono(&pcm, channels);
                        if let Ok(mut buffer) = buffer.lock() {
                            buffer.extend_from_slice(&mono);
                        }
                    }
                },
                on_error,
                None,
            ),
            other => {
                return Err(RecordingError::StartFailed(format!(
                    "Unsupported sample format: {:?}",
                    other
                )))
            }
        };

        stream.map_err(|e| RecordingError::StartFailed(e.to_string()))
    }

    /// Package captured samples as a WAV clip
    fn encode_audio(samples: Vec<i16>, sample_rate: u32) -> Result<AudioAsset, RecordingError> {
        if samples.is_empty() {
            return Ok(AudioAsset::new(Vec::new(), "audio/wav"));
        }

        let clip = PcmClip {
            samples,
            sample_rate,
        };
        let wav = encode_wav(&clip).map_err(|e| RecordingError::EncodeFailed(e.to_string()))?;

        Ok(AudioAsset::new(wav, "audio/wav").with_stream_info(sample_rate, 1))
    }
}

impl Default for CpalRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioRecorder for CpalRecorder {
    async fn record(
        &self,
        max_duration: Duration,
        stop: Arc<AtomicBool>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<AudioAsset, RecordingError> {
        if self.is_recording.swap(true, Ordering::SeqCst) {
            return Err(RecordingError::StartFailed(
                "Recording already in progress".to_string(),
            ));
        }

        if let Ok(mut buffer) = self.audio_buffer.lock() {
            buffer.clear();
        }

        let max_ms = max_duration.as_millis();
        let audio_buffer = Arc::clone(&self.audio_buffer);
        let is_recording = Arc::clone(&self.is_recording);
        let thread_stop = Arc::clone(&stop);

        let record_handle = tokio::task::spawn_blocking(move || {
            let result = (|| {
                let device = CpalRecorder::get_input_device()?;
                let (config, sample_format) = CpalRecorder::get_input_config(&device)?;
                let sample_rate = config.sample_rate.0;

                tracing::debug!(
                    device = %device.name().unwrap_or_default(),
                    sample_rate,
                    channels = config.channels,
                    "Opening input stream"
                );

                let stream = CpalRecorder::build_stream(
                    &device,
                    &config,
                    sample_format,
                    Arc::clone(&audio_buffer),
                    Arc::clone(&is_recording),
                )?;
                stream
                    .play()
                    .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

                let start = Instant::now();
                while !thread_stop.load(Ordering::SeqCst)
                    && (start.elapsed().as_millis() as u64) < max_ms
                {
                    std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));
                }

                drop(stream);
                Ok::<u32, RecordingError>(sample_rate)
            })();

            is_recording.store(false, Ordering::SeqCst);
            result
        });

        if let Some(progress) = on_progress {
            let start = Instant::now();
            let is_recording = Arc::clone(&self.is_recording);

            tokio::spawn(async move {
                let mut ticker = interval(TokioDuration::from_millis(100));
                while is_recording.load(Ordering::SeqCst) {
                    ticker.tick().await;
                    let elapsed = (start.elapsed().as_millis() as u64).min(max_ms);
                    progress(elapsed, max_ms);
                }
            });
        }

        let sample_rate = record_handle
            .await
            .map_err(|e| RecordingError::RecordingFailed(format!("Task join error: {}", e)))??;

        let samples = self
            .audio_buffer
            .lock()
            .map(|mut buffer| std::mem::take(&mut *buffer))
            .map_err(|_| RecordingError::RecordingFailed("Audio buffer poisoned".to_string()))?;

        tracing::debug!(samples = samples.len(), sample_rate, "Recording finished");

        tokio::task::spawn_blocking(move || Self::encode_audio(samples, sample_rate))
            .await
            .map_err(|e| RecordingError::EncodeFailed(format!("Encode task error: {}", e)))?
    }
}
