use rollout_model::ModelError;
use thiserror::Error;

use crate::runner::RunnerError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    #[error("worker task failed to join: {0}")]
    Join(String),

    #[error("runner error: {0}")]
    Runner(#[from] RunnerError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
