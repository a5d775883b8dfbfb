use std::time::Duration;

use async_trait::async_trait;
use rollout_model::StepCount;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Failure of the step-execution primitive.
///
/// Either variant aborts the running episode; neither is a truncation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("step interrupted before completion")]
    Interrupted,

    #[error("step failed: {0}")]
    Failed(String),
}

/// Executes one step of an episode.
///
/// Returning `Ok(())` means the full simulated cost has elapsed; the runner reads the clock right after.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    async fn execute(&self, step: StepCount, cost: Duration) -> Result<(), StepError>;
}

/// Executor that suspends the task for the step cost.
///
/// With a cancellation token attached, a cancelled token interrupts the step in flight
/// and every following one.
#[derive(Debug, Clone, Default)]
pub struct SleepExecutor {
    cancel: Option<CancellationToken>,
}

impl SleepExecutor {
    /// Executor that can not be interrupted.
    pub fn new() -> Self {
        Self { cancel: None }
    }

    /// Executor interrupted by `cancel`.
    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }
}

#[async_trait]
impl StepExecutor for SleepExecutor {
    async fn execute(&self, step: StepCount, cost: Duration) -> Result<(), StepError> {
        let Some(cancel) = &self.cancel else {
            tokio::time::sleep(cost).await;
            return Ok(());
        };
        if cancel.is_cancelled() {
            return Err(StepError::Interrupted);
        }

        tokio::select! {
            _ = tokio::time::sleep(cost) => Ok(()),
            _ = cancel.cancelled() => {
                trace!(step, "cancellation requested; interrupting step");
                Err(StepError::Interrupted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_the_cost() {
        let exec = SleepExecutor::new();
        let start = Instant::now();
        exec.execute(0, Duration::from_millis(200)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_cost_returns_immediately() {
        let exec = SleepExecutor::new();
        exec.execute(0, Duration::ZERO).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_token_interrupts_before_sleeping() {
        let token = CancellationToken::new();
        token.cancel();
        let exec = SleepExecutor::with_cancel(token);

        let start = Instant::now();
        let err = exec.execute(3, Duration::from_secs(10)).await.unwrap_err();
        assert_eq!(err, StepError::Interrupted);
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_interrupts_step_in_flight() {
        let token = CancellationToken::new();
        let exec = SleepExecutor::with_cancel(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            token.cancel();
        });

        let start = Instant::now();
        let res = exec.execute(0, Duration::from_secs(60)).await;
        assert_eq!(res, Err(StepError::Interrupted));
        assert!(start.elapsed() < Duration::from_secs(60));
        canceller.await.unwrap();
    }
}
