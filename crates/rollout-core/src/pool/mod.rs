//! In-process execution substrate.
//!
//! - Hands every worker a rank in `0..size`.
//! - Builds one [`EpisodeRunner`] per worker from a shared [`EpisodeConfig`].
//! - Invokes `run_episode` on all workers concurrently and gathers the reports.
//!
//! Workers share nothing mutable; reports come back ordered by rank, not by finish time.
use std::{fmt, sync::Arc};

use rollout_model::{EpisodeConfig, EpisodeResult, WorkerIdentity};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::{
    capability::SleepExecutor,
    error::CoreError,
    identity::StaticIdentity,
    runner::{EpisodeRunner, RunnerContext, RunnerError},
};

/// Outcome of one worker's episode.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerReport {
    pub identity: WorkerIdentity,
    pub result: Result<EpisodeResult, RunnerError>,
}

impl WorkerReport {
    /// Steps completed, or `None` if the episode was aborted.
    pub fn steps(&self) -> Option<u64> {
        self.result.as_ref().ok().map(|r| r.steps_completed)
    }
}

impl fmt::Display for WorkerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(r) => write!(f, "{} {}", self.identity, r),
            Err(e) => write!(f, "{} {}", self.identity, e),
        }
    }
}

/// Fixed-size pool of episode runners.
pub struct WorkerPool {
    runners: Vec<Arc<EpisodeRunner>>,
    cancel: CancellationToken,
}

impl WorkerPool {
    /// Build a pool whose workers sleep through their steps and can be interrupted by [`WorkerPool::cancel`].
    ///
    /// The executor in `ctx` is replaced per worker; draw, clock and metrics are shared.
    pub fn new(size: u32, config: EpisodeConfig, ctx: RunnerContext) -> Result<Self, CoreError> {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        Self::build(size, config, cancel, move || {
            ctx.clone()
                .with_executor(Arc::new(SleepExecutor::with_cancel(token.child_token())))
        })
    }

    /// Build a pool that uses the executor from `ctx` unchanged for every worker.
    ///
    /// [`WorkerPool::cancel`] only reaches executors that observe the pool token, so it has no
    /// effect here unless the supplied executor was built around [`WorkerPool::cancel_token`].
    pub fn with_shared_executor(
        size: u32,
        config: EpisodeConfig,
        ctx: RunnerContext,
    ) -> Result<Self, CoreError> {
        Self::build(size, config, CancellationToken::new(), move || ctx.clone())
    }

    fn build<F>(
        size: u32,
        config: EpisodeConfig,
        cancel: CancellationToken,
        worker_ctx: F,
    ) -> Result<Self, CoreError>
    where
        F: Fn() -> RunnerContext,
    {
        if size == 0 {
            return Err(CoreError::InvalidPool("pool size must be at least 1".into()));
        }

        let runners = (0..size)
            .map(|rank| -> Result<Arc<EpisodeRunner>, CoreError> {
                let source = StaticIdentity(WorkerIdentity::new(rank, size)?);
                let runner = EpisodeRunner::from_source(config.clone(), &source, worker_ctx())?;
                Ok(Arc::new(runner))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(size, %config, "worker pool built");
        Ok(Self { runners, cancel })
    }

    /// Number of workers.
    pub fn size(&self) -> usize {
        self.runners.len()
    }

    /// Runners in rank order.
    pub fn runners(&self) -> &[Arc<EpisodeRunner>] {
        &self.runners
    }

    /// Token observed by the pool's sleep executors.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Interrupt in-flight episodes; affected workers report [`RunnerError::Interrupted`].
    ///
    /// Cancellation is permanent: later calls to [`WorkerPool::run_all`] abort on their first step.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run one episode on every worker concurrently.
    ///
    /// Reports are sorted by rank. A worker task that panics fails the whole call.
    #[instrument(level = "debug", skip(self), fields(size = self.runners.len()))]
    pub async fn run_all(&self) -> Result<Vec<WorkerReport>, CoreError> {
        let mut set = JoinSet::new();
        for runner in &self.runners {
            let runner = Arc::clone(runner);
            set.spawn(async move {
                let result = runner.run_episode().await;
                WorkerReport {
                    identity: runner.identity(),
                    result,
                }
            });
        }

        let mut reports = Vec::with_capacity(self.runners.len());
        while let Some(joined) = set.join_next().await {
            reports.push(joined.map_err(|e| CoreError::Join(e.to_string()))?);
        }
        reports.sort_by_key(|r| r.identity.rank());

        let aborted = reports.iter().filter(|r| r.result.is_err()).count();
        info!(workers = reports.len(), aborted, "pool round finished");
        Ok(reports)
    }
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("size", &self.runners.len())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}
