//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::conversion::ConversionStage;

/// Presenter for CLI output formatting.
///
/// Status goes to stderr; only results go to stdout.
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Spinner that follows the pipeline from stage to stage
    pub fn stage_spinner(&self) -> StageSpinner {
        StageSpinner::new()
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format recording progress bar
pub fn format_progress(elapsed_ms: u64, total_ms: u64) -> String {
    let elapsed_secs = elapsed_ms / 1000;
    let total_secs = total_ms / 1000;
    let percent = if total_ms > 0 {
        (elapsed_ms as f64 / total_ms as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    let bar_width = 20;
    let filled = ((percent / 100.0) * bar_width as f64) as usize;
    let empty = bar_width - filled;

    format!(
        "[{}{}] {:>3}s / {}s",
        "█".repeat(filled).cyan(),
        "░".repeat(empty),
        elapsed_secs,
        total_secs
    )
}

/// Spinner line describing what the pipeline is doing right now
pub fn stage_message(stage: ConversionStage, recording: bool) -> &'static str {
    match stage {
        ConversionStage::Idle => "Waiting...",
        ConversionStage::Acquiring if recording => "Recording... (press Enter to stop)",
        ConversionStage::Acquiring => "Reading audio file...",
        ConversionStage::Normalizing => "Converting audio to WAV...",
        ConversionStage::Uploading => "Uploading audio...",
        ConversionStage::Invoking => "Converting accent...",
        ConversionStage::Retrieving => "Retrieving converted audio...",
        ConversionStage::Done => "Accent conversion complete",
        ConversionStage::Failed => "Accent conversion failed",
    }
}

/// Cheap handle to one spinner, shareable with pipeline callbacks
#[derive(Clone)]
pub struct StageSpinner {
    bar: ProgressBar,
}

impl StageSpinner {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Update the line for a stage change; terminal stages finish the spinner
    pub fn stage(&self, stage: ConversionStage, recording: bool) {
        let message = stage_message(stage, recording);
        match stage {
            ConversionStage::Done => self
                .bar
                .finish_with_message(format!("{} {}", "✓".green(), message)),
            ConversionStage::Failed => self
                .bar
                .finish_with_message(format!("{} {}", "✗".red(), message)),
            _ => self.bar.set_message(message),
        }
    }

    pub fn recording_progress(&self, elapsed_ms: u64, total_ms: u64) {
        self.bar.set_message(format!(
            "Recording... {} (press Enter to stop)",
            format_progress(elapsed_ms, total_ms)
        ));
    }

    /// Print a line above the spinner without disturbing it
    pub fn note(&self, message: &str) {
        self.bar.println(format!("{} {}", "✓".green(), message));
    }

    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}
