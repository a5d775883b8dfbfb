use rollout_model::{ModelError, StepCount};
use thiserror::Error;

use crate::capability::StepError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunnerError {
    #[error("episode aborted: step {step} was interrupted")]
    Interrupted { step: StepCount },

    #[error("episode aborted: step {step} failed: {reason}")]
    StepFailed { step: StepCount, reason: String },

    #[error("identity resolution failed: {0}")]
    Identity(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ModelError),
}

impl RunnerError {
    /// Map an executor failure at `step` into an abort of the episode.
    pub fn from_step(step: StepCount, err: StepError) -> Self {
        match err {
            StepError::Interrupted => RunnerError::Interrupted { step },
            StepError::Failed(reason) => RunnerError::StepFailed { step, reason },
        }
    }

    /// Low-cardinality label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RunnerError::Interrupted { .. } => "interrupted",
            RunnerError::StepFailed { .. } => "step_failed",
            RunnerError::Identity(_) => "identity",
            RunnerError::Config(_) => "config",
        }
    }

    /// Returns `true` if the error aborted an episode that had already started.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            RunnerError::Interrupted { .. } | RunnerError::StepFailed { .. }
        )
    }
}
