//! Conversion pipeline state machine

use std::fmt;
use thiserror::Error;

/// Pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionStage {
    #[default]
    Idle,
    Acquiring,
    Normalizing,
    Uploading,
    Invoking,
    Retrieving,
    Done,
    Failed,
}

impl ConversionStage {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Acquiring => "acquiring",
            Self::Normalizing => "normalizing",
            Self::Uploading => "uploading",
            Self::Invoking => "invoking",
            Self::Retrieving => "retrieving",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Stage that follows this one on success, if any
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Acquiring),
            Self::Acquiring => Some(Self::Normalizing),
            Self::Normalizing => Some(Self::Uploading),
            Self::Uploading => Some(Self::Invoking),
            Self::Invoking => Some(Self::Retrieving),
            Self::Retrieving => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid stage transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid stage transition: cannot {action} while {current_stage}")]
pub struct InvalidStageTransition {
    pub current_stage: ConversionStage,
    pub action: String,
}

/// One conversion attempt.
///
/// State machine:
///   IDLE -> ACQUIRING -> NORMALIZING -> UPLOADING -> INVOKING -> RETRIEVING -> DONE
///   any running stage -> FAILED (fail)
///
/// Sessions are never reused; each attempt starts from a fresh IDLE session.
#[derive(Debug, Default)]
pub struct ConversionSession {
    stage: ConversionStage,
}

impl ConversionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> ConversionStage {
        self.stage
    }

    /// Move to the next stage in the pipeline
    pub fn advance(&mut self) -> Result<ConversionStage, InvalidStageTransition> {
        let next = self.stage.next().ok_or_else(|| InvalidStageTransition {
            current_stage: self.stage,
            action: "advance".to_string(),
        })?;
        self.stage = next;
        Ok(next)
    }

    /// Abort the attempt from the current stage
    pub fn fail(&mut self) -> Result<(), InvalidStageTransition> {
        if self.stage.is_terminal() || self.stage == ConversionStage::Idle {
            return Err(InvalidStageTransition {
                current_stage: self.stage,
                action: "fail".to_string(),
            });
        }
        self.stage = ConversionStage::Failed;
        Ok(())
    }
}
