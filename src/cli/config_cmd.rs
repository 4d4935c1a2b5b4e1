//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::conversion::Accent;
use crate::domain::error::ConfigError;
use crate::domain::recording::Duration;

use super::args::{is_valid_config_key, ConfigAction, SECRET_CONFIG_KEYS, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;
    let value = normalize_config_value(key, value)?;

    let mut config = store.load().await?;
    *field_mut(&mut config, key) = Some(value.clone());
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, display_value(key, &value)));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    match field(&config, key) {
        Some(v) => presenter.output(&display_value(key, v)),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = field(&config, key)
            .map(|v| display_value(key, v))
            .unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a value for `key` and return the form that gets stored.
///
/// Accents are stored by name so `en-us` and `american` end up identical.
fn normalize_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "max_duration" => value
            .parse::<Duration>()
            .map(|d| d.to_string())
            .map_err(|e| invalid(e.to_string())),
        "accent" => value
            .parse::<Accent>()
            .map(|a| a.to_string())
            .map_err(|e| invalid(e.to_string())),
        "endpoint_url" => {
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(value.to_string())
            } else {
                Err(invalid("Value must start with http:// or https://".to_string()))
            }
        }
        _ => {
            if value.trim().is_empty() {
                Err(invalid("Value must not be empty".to_string()))
            } else {
                Ok(value.to_string())
            }
        }
    }
}

fn field<'a>(config: &'a AppConfig, key: &str) -> Option<&'a String> {
    match key {
        "aws_access_key_id" => config.aws_access_key_id.as_ref(),
        "aws_secret_access_key" => config.aws_secret_access_key.as_ref(),
        "region" => config.region.as_ref(),
        "endpoint_name" => config.endpoint_name.as_ref(),
        "endpoint_url" => config.endpoint_url.as_ref(),
        "bucket" => config.bucket.as_ref(),
        "accent" => config.accent.as_ref(),
        "output" => config.output.as_ref(),
        "max_duration" => config.max_duration.as_ref(),
        _ => None,
    }
}

/// Callers validate `key` first; unknown keys fall through to `output`
fn field_mut<'a>(config: &'a mut AppConfig, key: &str) -> &'a mut Option<String> {
    match key {
        "aws_access_key_id" => &mut config.aws_access_key_id,
        "aws_secret_access_key" => &mut config.aws_secret_access_key,
        "region" => &mut config.region,
        "endpoint_name" => &mut config.endpoint_name,
        "endpoint_url" => &mut config.endpoint_url,
        "bucket" => &mut config.bucket,
        "accent" => &mut config.accent,
        "max_duration" => &mut config.max_duration,
        _ => &mut config.output,
    }
}

fn display_value(key: &str, value: &str) -> String {
    if SECRET_CONFIG_KEYS.contains(&key) {
        mask_secret(value)
    } else {
        value.to_string()
    }
}

/// Mask a secret for display (show first 4 and last 4 chars)
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
