//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, stop handling,
//! logging setup and the conversion runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    run_convert, RunOptions, EXIT_ERROR, EXIT_INTERRUPTED, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::{AccentArg, Cli, Commands, ConfigAction};
pub use presenter::Presenter;
