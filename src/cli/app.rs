//! Main app runner for a conversion

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::{
    AudioNormalizer, AudioPlayer, AudioRecorder, ConfigStore, InferenceEndpoint, ObjectStorage,
    ProgressCallback, ResultFetcher,
};
use crate::application::{
    ConvertAccentUseCase, ConvertCallbacks, ConvertInput, ConvertOutput, InputSource,
};
use crate::domain::config::AppConfig;
use crate::domain::conversion::{Accent, ConversionStage};
use crate::domain::error::ConfigError;
use crate::domain::recording::Duration;
use crate::infrastructure::{
    create_endpoint, CpalRecorder, EndpointTarget, HttpFetcher, RodioPlayer, S3ObjectStorage,
    S3Settings, SymphoniaNormalizer, XdgConfigStore,
};

use super::args::Cli;
use super::presenter::{Presenter, StageSpinner};
use super::signals::StopTriggers;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
pub const EXIT_INTERRUPTED: u8 = 130;

/// What a single run does, after config merging and validation
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: Option<InputSource>,
    pub accent: Accent,
    pub output: PathBuf,
    pub play: bool,
}

/// Remote resources a run needs
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub bucket: String,
    pub endpoint: EndpointTarget,
    pub storage: S3Settings,
}

/// Build a config from environment variables via `lookup`
pub fn env_config_with<L>(lookup: L) -> AppConfig
where
    L: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());

    AppConfig {
        aws_access_key_id: get("AWS_ACCESS_KEY_ID"),
        aws_secret_access_key: get("AWS_SECRET_ACCESS_KEY"),
        region: get("AWS_REGION"),
        endpoint_name: get("SAGEMAKER_ENDPOINT_NAME"),
        endpoint_url: get("ACCENT_ENDPOINT_URL"),
        bucket: get("S3_BUCKET_NAME"),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        tracing::warn!(path = %store.path().display(), error = %e, "Ignoring unreadable config file");
        AppConfig::empty()
    });

    let env_config = env_config_with(|name| env::var(name).ok());

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Project CLI flags onto config keys so they win the merge
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        accent: cli.accent.map(|a| Accent::from(a).to_string()),
        output: cli
            .output
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        max_duration: cli.max_duration.clone(),
        ..Default::default()
    }
}

/// Validate the merged config and pick the input source
pub fn resolve_run_options(cli: &Cli, config: &AppConfig) -> Result<RunOptions, ConfigError> {
    let accent = match config.accent.as_deref() {
        Some(value) => value
            .parse::<Accent>()
            .map_err(|e| ConfigError::ValidationError {
                key: "accent".to_string(),
                message: e.to_string(),
            })?,
        None => Accent::default(),
    };

    let max_duration = match config.max_duration.as_deref() {
        Some(value) => value
            .parse::<Duration>()
            .map_err(|e| ConfigError::ValidationError {
                key: "max_duration".to_string(),
                message: e.to_string(),
            })?,
        None => Duration::default_max_recording(),
    };

    let source = if cli.record {
        Some(InputSource::Record { max_duration })
    } else {
        cli.input.clone().map(|path| InputSource::File {
            path,
            mime_type: cli.mime.clone(),
        })
    };

    Ok(RunOptions {
        source,
        accent,
        output: PathBuf::from(config.output_or_default()),
        play: cli.play,
    })
}

/// Check that a bucket and an endpoint are configured.
///
/// `endpoint_url` wins over `endpoint_name` when both are set.
pub fn resolve_connection(config: &AppConfig) -> Result<ConnectionSettings, ConfigError> {
    let bucket = config
        .bucket
        .clone()
        .filter(|b| !b.trim().is_empty())
        .ok_or(ConfigError::Missing {
            key: "bucket",
            env: "S3_BUCKET_NAME",
        })?;

    let credentials = config
        .credentials()
        .map(|(id, secret)| (id.to_string(), secret.to_string()));

    let endpoint = match (&config.endpoint_url, &config.endpoint_name) {
        (Some(url), _) if !url.trim().is_empty() => EndpointTarget::Url(url.clone()),
        (_, Some(name)) if !name.trim().is_empty() => EndpointTarget::SageMaker {
            name: name.clone(),
            region: config.region.clone(),
            credentials: credentials.clone(),
        },
        _ => {
            return Err(ConfigError::Missing {
                key: "endpoint_name",
                env: "SAGEMAKER_ENDPOINT_NAME",
            })
        }
    };

    Ok(ConnectionSettings {
        bucket,
        endpoint,
        storage: S3Settings {
            region: config.region.clone(),
            access_key_id: credentials.as_ref().map(|(id, _)| id.clone()),
            secret_access_key: credentials.map(|(_, secret)| secret),
        },
    })
}

/// Run one conversion with the production adapters
pub async fn run_convert(options: RunOptions, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let connection = match resolve_connection(config) {
        Ok(c) => c,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    tracing::debug!(
        bucket = %connection.bucket,
        endpoint = %connection.endpoint,
        accent = %options.accent,
        "Starting conversion"
    );

    let use_case = ConvertAccentUseCase::new(
        CpalRecorder::new(),
        SymphoniaNormalizer::new(),
        S3ObjectStorage::new(connection.storage.clone()),
        create_endpoint(&connection.endpoint).await,
        HttpFetcher::new(),
    );

    run_pipeline(&use_case, &RodioPlayer::new(), options, connection.bucket, &presenter).await
}

/// Drive the use case, then save and optionally play the result
pub async fn run_pipeline<R, N, S, E, F, P>(
    use_case: &ConvertAccentUseCase<R, N, S, E, F>,
    player: &P,
    options: RunOptions,
    bucket: String,
    presenter: &Presenter,
) -> ExitCode
where
    R: AudioRecorder,
    N: AudioNormalizer,
    S: ObjectStorage,
    E: InferenceEndpoint,
    F: ResultFetcher,
    P: AudioPlayer,
{
    let recording = matches!(options.source, Some(InputSource::Record { .. }));
    let triggers = StopTriggers::new(use_case.stop_flag());
    if recording {
        triggers.watch_enter();
    }

    let spinner = presenter.stage_spinner();
    let callbacks = build_callbacks(&spinner, use_case, recording);

    let input = ConvertInput {
        source: options.source,
        accent: options.accent,
        bucket,
    };

    let result = tokio::select! {
        result = use_case.execute(input, callbacks) => result,
        _ = triggers.interrupted() => {
            spinner.clear();
            presenter.warn("Interrupted");
            return ExitCode::from(EXIT_INTERRUPTED);
        }
    };

    match result {
        Ok(output) => finish(output, &options.output, options.play, player, presenter).await,
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn build_callbacks<R, N, S, E, F>(
    spinner: &StageSpinner,
    use_case: &ConvertAccentUseCase<R, N, S, E, F>,
    recording: bool,
) -> ConvertCallbacks
where
    R: AudioRecorder,
    N: AudioNormalizer,
    S: ObjectStorage,
    E: InferenceEndpoint,
    F: ResultFetcher,
{
    let stage_spinner = spinner.clone();
    let stop_flag = use_case.stop_flag();
    let progress_spinner = spinner.clone();
    let note_spinner = spinner.clone();

    ConvertCallbacks {
        on_stage: Some(Box::new(move |stage| {
            if stage != ConversionStage::Acquiring {
                StopTriggers::capture_finished(&stop_flag);
            }
            stage_spinner.stage(stage, recording);
        })),
        on_progress: recording.then(|| {
            Arc::new(move |elapsed: u64, total: u64| {
                progress_spinner.recording_progress(elapsed, total)
            }) as ProgressCallback
        }),
        on_acquired: Some(Box::new(move |size: &str| {
            note_spinner.note(&format!("Audio ready ({})", size));
        })),
    }
}

async fn finish<P: AudioPlayer>(
    output: ConvertOutput,
    path: &Path,
    play: bool,
    player: &P,
    presenter: &Presenter,
) -> ExitCode {
    presenter.output(&output.signed_url);

    if let Err(e) = tokio::fs::write(path, &output.audio).await {
        presenter.error(&format!("Failed to write {}: {}", path.display(), e));
        return ExitCode::from(EXIT_ERROR);
    }
    presenter.success(&format!(
        "Saved converted audio to {} (from {})",
        path.display(),
        output.result_uri
    ));

    if play {
        if let Err(e) = player.play(output.audio).await {
            presenter.warn(&format!("Playback failed: {}", e));
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
