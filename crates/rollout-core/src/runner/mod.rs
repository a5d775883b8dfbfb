//! Episode runner: executes a bounded sequence of steps for one worker.
//!
//! A runner owns an immutable [`EpisodeConfig`] and a [`WorkerIdentity`] resolved once at construction.
//! Every call to [`EpisodeRunner::run_episode`] is independent: it draws its own target step count,
//! reads its own start instant and applies both truncation limits after every step.
mod error;
pub use error::RunnerError;

mod context;
pub use context::RunnerContext;

mod id;
pub use id::make_episode_id;

use std::time::Duration;

use rollout_model::{EpisodeConfig, EpisodeResult, StepCount, Truncation, WorkerIdentity};
use tokio::time::Instant;
use tracing::{Span, debug, info, instrument, warn};

use crate::{identity::IdentitySource, metrics::EpisodeOutcome, policy::TruncationPolicy};

/// How the step loop ended when it produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Termination {
    steps: StepCount,
    truncation: Option<Truncation>,
}

/// Runs episodes for a single worker.
#[derive(Debug, Clone)]
pub struct EpisodeRunner {
    config: EpisodeConfig,
    policy: TruncationPolicy,
    identity: WorkerIdentity,
    ctx: RunnerContext,
}

impl EpisodeRunner {
    /// Create a runner with an already resolved identity.
    pub fn new(config: EpisodeConfig, identity: WorkerIdentity, ctx: RunnerContext) -> Self {
        Self {
            policy: TruncationPolicy::from_config(&config),
            config,
            identity,
            ctx,
        }
    }

    /// Create a runner, asking `source` for the worker identity once.
    ///
    /// Identity resolution failures are fatal to construction.
    pub fn from_source(
        config: EpisodeConfig,
        source: &dyn IdentitySource,
        ctx: RunnerContext,
    ) -> Result<Self, RunnerError> {
        let identity = source.resolve_identity().inspect_err(|e| {
            ctx.metrics().record_runner_error(e.kind());
        })?;
        Ok(Self::new(config, identity, ctx))
    }

    #[inline]
    pub fn identity(&self) -> WorkerIdentity {
        self.identity
    }

    #[inline]
    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// Run one episode to natural completion or truncation.
    ///
    /// Returns the number of steps that ran. A truncated episode is reported exactly like a
    /// completed one; which policy fired is only visible in logs and metrics.
    /// An interrupted or failed step aborts the episode with an error and no partial result.
    #[instrument(level = "debug", skip(self), fields(worker = %self.identity, episode = tracing::field::Empty))]
    pub async fn run_episode(&self) -> Result<EpisodeResult, RunnerError> {
        Span::current().record("episode", make_episode_id(self.identity.rank()).as_str());

        let target = self.draw_target();
        info!("{} running episode with {target} steps", self.identity);
        self.ctx
            .metrics()
            .record_episode_started(self.identity.rank());

        let start = self.ctx.clock().now();
        let res = self.step_loop(target, start).await;
        let duration_ms = millis(self.ctx.clock().now().saturating_duration_since(start));

        match res {
            Ok(Termination { steps, truncation }) => {
                match truncation {
                    None => info!("{} episode completed with {steps} steps", self.identity),
                    Some(Truncation::StepLimit) => {
                        info!("{} forcing episode completion at {steps} steps", self.identity)
                    }
                    Some(Truncation::TimeLimit) => info!(
                        "{} forcing episode completion at {steps} steps as {:?} has passed",
                        self.identity,
                        self.policy.max_time.unwrap_or_default(),
                    ),
                }
                self.ctx.metrics().record_episode_finished(
                    EpisodeOutcome::from(truncation),
                    steps,
                    duration_ms,
                );
                Ok(EpisodeResult::new(steps))
            }
            Err(e) => {
                warn!(error = %e, "{} episode aborted", self.identity);
                self.ctx
                    .metrics()
                    .record_episode_finished(EpisodeOutcome::Aborted, 0, duration_ms);
                Err(e)
            }
        }
    }

    /// Draw the target step count, kept inside the configured range whatever the source returns.
    fn draw_target(&self) -> StepCount {
        let (low, high) = (self.config.low_steps(), self.config.high_steps());
        self.ctx.draw().draw(low, high).clamp(low, high)
    }

    async fn step_loop(&self, target: StepCount, start: Instant) -> Result<Termination, RunnerError> {
        for step in 0..target {
            self.execute_step(step, target).await?;

            let elapsed = self.ctx.clock().now().saturating_duration_since(start);
            if let Some(truncation) = self.policy.evaluate(step, elapsed) {
                debug!(step, ?elapsed, %truncation, "truncation policy fired");
                return Ok(Termination {
                    steps: step + 1,
                    truncation: Some(truncation),
                });
            }
        }
        Ok(Termination {
            steps: target,
            truncation: None,
        })
    }

    async fn execute_step(&self, step: StepCount, target: StepCount) -> Result<(), RunnerError> {
        debug!("{} executing step {}/{target}", self.identity, step + 1);
        self.ctx
            .executor()
            .execute(step, self.config.step_time())
            .await
            .map_err(|e| RunnerError::from_step(step, e))
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
