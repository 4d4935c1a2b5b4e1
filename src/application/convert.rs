//! Convert accent use case

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::audio::AudioAsset;
use crate::domain::conversion::{
    parse_result_uri, unwrap_endpoint_response, Accent, ConversionRequest, ConversionSession,
    ConversionStage, ObjectUri,
};
use crate::domain::error::{ObjectUriError, UnsupportedFormatError};
use crate::domain::recording::Duration;

use super::ports::{
    AudioNormalizer, AudioRecorder, FetchError, InferenceEndpoint, InvocationError,
    NormalizeError, ObjectStorage, ProgressCallback, RecordingError, ResultFetcher, StorageError,
    PRESIGN_EXPIRY,
};

/// Errors from the convert use case
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Please record or upload an audio file")]
    MissingInput,

    #[error("Recording failed: {0}")]
    Recording(#[from] RecordingError),

    #[error("Failed to read {path}: {message}")]
    ReadInput { path: String, message: String },

    #[error(transparent)]
    UnsupportedFormat(UnsupportedFormatError),

    #[error("Failed to convert audio to WAV: {0}")]
    Normalization(NormalizeError),

    #[error("Failed to upload audio: {0}")]
    Upload(#[from] StorageError),

    #[error("Error invoking endpoint: {0}")]
    Invocation(#[from] InvocationError),

    #[error("Invalid response format from endpoint. Expected an S3 URL: {0}")]
    InvalidResponseFormat(#[from] ObjectUriError),

    #[error("Failed to retrieve converted audio: {0}")]
    Retrieval(String),
}

impl From<NormalizeError> for ConvertError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::UnsupportedFormat(e) => Self::UnsupportedFormat(e),
            other => Self::Normalization(other),
        }
    }
}

impl From<FetchError> for ConvertError {
    fn from(err: FetchError) -> Self {
        Self::Retrieval(err.to_string())
    }
}

/// Where the input clip comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Capture from the microphone until stopped or `max_duration` elapses
    Record { max_duration: Duration },
    /// Read a local file; `mime_type` overrides extension-based detection
    File {
        path: PathBuf,
        mime_type: Option<String>,
    },
}

/// Input parameters for the convert use case
#[derive(Debug, Clone)]
pub struct ConvertInput {
    /// `None` when the user neither recorded nor uploaded anything
    pub source: Option<InputSource>,
    pub accent: Accent,
    /// Bucket receiving the uploaded clip
    pub bucket: String,
}

/// Output from the convert use case
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    /// Where the input clip was uploaded
    pub input_uri: ObjectUri,
    /// Where the endpoint stored the converted clip
    pub result_uri: ObjectUri,
    /// Time-limited URL for streaming the result
    pub signed_url: String,
    /// Converted clip, ready to save
    pub audio: Vec<u8>,
    /// Size of the acquired input in human-readable format
    pub input_size: String,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct ConvertCallbacks {
    /// Called on every stage change, including `Done` and `Failed`
    pub on_stage: Option<Box<dyn Fn(ConversionStage) + Send + Sync>>,
    /// Called during recording with (elapsed_ms, max_ms)
    pub on_progress: Option<ProgressCallback>,
    /// Called once the input clip is available, with its size
    pub on_acquired: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// Accent conversion use case: acquire, normalize, upload, invoke, retrieve.
pub struct ConvertAccentUseCase<R, N, S, E, F>
where
    R: AudioRecorder,
    N: AudioNormalizer,
    S: ObjectStorage,
    E: InferenceEndpoint,
    F: ResultFetcher,
{
    recorder: R,
    normalizer: N,
    storage: S,
    endpoint: E,
    fetcher: F,
    stop_flag: Arc<AtomicBool>,
}

impl<R, N, S, E, F> ConvertAccentUseCase<R, N, S, E, F>
where
    R: AudioRecorder,
    N: AudioNormalizer,
    S: ObjectStorage,
    E: InferenceEndpoint,
    F: ResultFetcher,
{
    /// Create a new use case instance
    pub fn new(recorder: R, normalizer: N, storage: S, endpoint: E, fetcher: F) -> Self {
        Self {
            recorder,
            normalizer,
            storage,
            endpoint,
            fetcher,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the stop flag so a key press or signal can end a recording
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_flag)
    }

    /// Run one conversion attempt.
    ///
    /// Any stage failure ends the attempt; nothing is retried.
    pub async fn execute(
        &self,
        input: ConvertInput,
        callbacks: ConvertCallbacks,
    ) -> Result<ConvertOutput, ConvertError> {
        self.stop_flag.store(false, Ordering::SeqCst);

        let mut session = ConversionSession::new();
        let result = self.run(&mut session, input, &callbacks).await;

        match &result {
            Ok(output) => {
                enter_next_stage(&mut session, &callbacks);
                tracing::info!(result = %output.result_uri, bytes = output.audio.len(), "Conversion complete");
            }
            Err(e) => {
                let failed_in = session.stage();
                if session.fail().is_ok() {
                    if let Some(ref cb) = callbacks.on_stage {
                        cb(ConversionStage::Failed);
                    }
                }
                tracing::warn!(stage = %failed_in, error = %e, "Conversion failed");
            }
        }

        result
    }

    async fn run(
        &self,
        session: &mut ConversionSession,
        input: ConvertInput,
        callbacks: &ConvertCallbacks,
    ) -> Result<ConvertOutput, ConvertError> {
        enter_next_stage(session, callbacks);
        let source = input.source.ok_or(ConvertError::MissingInput)?;
        let audio = self.acquire(source, callbacks).await?;
        let input_size = audio.human_readable_size();
        if let Some(ref cb) = callbacks.on_acquired {
            cb(&input_size);
        }

        enter_next_stage(session, callbacks);
        let wav = self.normalizer.normalize(&audio).await?;
        drop(audio);

        enter_next_stage(session, callbacks);
        let input_uri = ObjectUri::for_input(input.bucket, &wav.file_name());
        self.storage.upload(wav.path(), &input_uri).await?;
        tracing::debug!(uri = %input_uri, "Uploaded input clip");

        enter_next_stage(session, callbacks);
        let request = ConversionRequest::new(input_uri.clone(), input.accent);
        let raw = self.endpoint.invoke(&request).await?;
        tracing::debug!(response = %raw, "Endpoint responded");

        enter_next_stage(session, callbacks);
        let result_uri = parse_result_uri(unwrap_endpoint_response(&raw))?;
        let signed_url = self
            .storage
            .presign_get(&result_uri, PRESIGN_EXPIRY)
            .await
            .map_err(|e| ConvertError::Retrieval(e.to_string()))?;
        let audio = self.fetcher.fetch(&signed_url).await?;

        Ok(ConvertOutput {
            input_uri,
            result_uri,
            signed_url,
            audio,
            input_size,
        })
    }

    async fn acquire(
        &self,
        source: InputSource,
        callbacks: &ConvertCallbacks,
    ) -> Result<AudioAsset, ConvertError> {
        let audio = match source {
            InputSource::Record { max_duration } => {
                self.recorder
                    .record(
                        max_duration,
                        Arc::clone(&self.stop_flag),
                        callbacks.on_progress.clone(),
                    )
                    .await?
            }
            InputSource::File { path, mime_type } => {
                let data = tokio::fs::read(&path)
                    .await
                    .map_err(|e| ConvertError::ReadInput {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                let mime_type =
                    mime_type.unwrap_or_else(|| AudioAsset::mime_for_path(&path).to_string());
                AudioAsset::new(data, mime_type)
            }
        };

        if audio.is_empty() {
            return Err(ConvertError::MissingInput);
        }
        Ok(audio)
    }
}

fn enter_next_stage(session: &mut ConversionSession, callbacks: &ConvertCallbacks) {
    if let Ok(stage) = session.advance() {
        if let Some(ref cb) = callbacks.on_stage {
            cb(stage);
        }
    }
}
