use std::sync::Arc;

use rollout_model::Truncation;

/// Terminal state of an episode, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeOutcome {
    /// Every drawn step ran.
    Completed,
    /// Cut short by the step-count limit.
    TruncatedBySteps,
    /// Cut short by the time limit.
    TruncatedByTime,
    /// Step execution was interrupted or failed; no result was produced.
    Aborted,
}

impl EpisodeOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            EpisodeOutcome::Completed => "completed",
            EpisodeOutcome::TruncatedBySteps => "truncated_steps",
            EpisodeOutcome::TruncatedByTime => "truncated_time",
            EpisodeOutcome::Aborted => "aborted",
        }
    }

    /// Returns `true` for both truncation outcomes.
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            EpisodeOutcome::TruncatedBySteps | EpisodeOutcome::TruncatedByTime
        )
    }
}

impl From<Option<Truncation>> for EpisodeOutcome {
    fn from(t: Option<Truncation>) -> Self {
        match t {
            None => EpisodeOutcome::Completed,
            Some(Truncation::StepLimit) => EpisodeOutcome::TruncatedBySteps,
            Some(Truncation::TimeLimit) => EpisodeOutcome::TruncatedByTime,
        }
    }
}

/// Backend metrics collection interface.
///
/// Implementations are injected via [`crate::RunnerContext`] and shared by every runner of a pool.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record the start of an episode on the worker with the given `rank`.
    fn record_episode_started(&self, rank: u32);
    /// Record an episode reaching a terminal state.
    ///
    /// # Arguments
    /// - `outcome`: terminal state, including which policy truncated it
    /// - `steps`: steps completed (`0` for aborted episodes)
    /// - `duration_ms`: wall-clock time of the step loop in milliseconds
    fn record_episode_finished(&self, outcome: EpisodeOutcome, steps: u64, duration_ms: u64);
    /// Record a runner failure that is not an episode outcome (e.g. identity resolution).
    fn record_runner_error(&self, error_kind: &str);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
