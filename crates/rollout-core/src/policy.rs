use std::time::Duration;

use rollout_model::{EpisodeConfig, StepCount, Truncation};

/// Truncation limits of an episode, detached from the rest of [`EpisodeConfig`].
///
/// Evaluation is pure: it only looks at the finished step index and the elapsed time,
/// so the step loop stays the single owner of clocks and side effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TruncationPolicy {
    pub max_steps: Option<StepCount>,
    pub max_time: Option<Duration>,
}

impl TruncationPolicy {
    /// Extract the limits from a runner config.
    pub fn from_config(cfg: &EpisodeConfig) -> Self {
        Self {
            max_steps: cfg.max_steps(),
            max_time: cfg.max_time(),
        }
    }

    /// Policy that never truncates.
    pub const fn unbounded() -> Self {
        Self {
            max_steps: None,
            max_time: None,
        }
    }

    /// Decide whether the episode ends after the zero-based `step` has executed.
    ///
    /// The step-count limit is checked before the time limit, so when both would fire on
    /// the same step the result is [`Truncation::StepLimit`]. Both limits are inclusive:
    /// `step >= max_steps` and `elapsed >= max_time`.
    pub fn evaluate(&self, step: StepCount, elapsed: Duration) -> Option<Truncation> {
        if self.max_steps.is_some_and(|max| step >= max) {
            return Some(Truncation::StepLimit);
        }
        if self.max_time.is_some_and(|max| elapsed >= max) {
            return Some(Truncation::TimeLimit);
        }
        None
    }
}
