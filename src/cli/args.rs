//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::conversion::Accent;

/// Accent Convert - voice accent conversion through a hosted model
#[derive(Parser, Debug)]
#[command(name = "accent-convert")]
#[command(version)]
#[command(about = "Convert the accent of a voice clip using a remote inference endpoint")]
#[command(long_about = None)]
pub struct Cli {
    /// Record from the default microphone (press Enter or Ctrl+C to stop)
    #[arg(short = 'r', long, conflicts_with = "input")]
    pub record: bool,

    /// Audio file to convert (wav, mp3, mp4)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Override the MIME type inferred from the file extension
    #[arg(long, value_name = "TYPE", requires = "input")]
    pub mime: Option<String>,

    /// Target accent
    #[arg(short = 'a', long, value_name = "ACCENT")]
    pub accent: Option<AccentArg>,

    /// Stop recording after this long (e.g., 30s, 1m, 2m30s)
    #[arg(long, value_name = "TIME", requires = "record")]
    pub max_duration: Option<String>,

    /// Where to save the converted clip
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Play the converted clip when done
    #[arg(short = 'p', long)]
    pub play: bool,

    /// Verbose diagnostic logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Accent argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AccentArg {
    #[value(alias = "en-br")]
    British,
    #[value(alias = "en-us")]
    American,
}

impl From<AccentArg> for Accent {
    fn from(arg: AccentArg) -> Self {
        match arg {
            AccentArg::British => Accent::British,
            AccentArg::American => Accent::American,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "aws_access_key_id",
    "aws_secret_access_key",
    "region",
    "endpoint_name",
    "endpoint_url",
    "bucket",
    "accent",
    "output",
    "max_duration",
];

/// Keys whose values are masked on display
pub const SECRET_CONFIG_KEYS: &[&str] = &["aws_access_key_id", "aws_secret_access_key"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
