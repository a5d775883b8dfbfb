use std::{fmt, time::Duration};

use crate::{
    StepCount,
    error::{ModelError, ModelResult},
};

/// Immutable configuration of an episode runner.
///
/// `EpisodeConfig` describes how long an episode *wants* to run and when it must be cut short:
/// - the inclusive range `[low_steps, high_steps]` the target step count is drawn from
/// - the simulated cost of one step (`step_time`)
/// - the optional truncation limits (`max_steps`, `max_time`)
///
/// The range invariant is checked in [`EpisodeConfig::new`]; negative values are unrepresentable.
/// Use [`crate::EpisodeSpec`] to build a config from untrusted, loosely typed input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeConfig {
    low_steps: StepCount,
    high_steps: StepCount,
    step_time: Duration,
    max_steps: Option<StepCount>,
    max_time: Option<Duration>,
}

impl EpisodeConfig {
    /// Create a config without truncation limits.
    pub fn new(low_steps: StepCount, high_steps: StepCount, step_time: Duration) -> ModelResult<Self> {
        if low_steps > high_steps {
            return Err(ModelError::InvalidRange {
                low: low_steps,
                high: high_steps,
            });
        }
        Ok(Self {
            low_steps,
            high_steps,
            step_time,
            max_steps: None,
            max_time: None,
        })
    }

    /// Truncate once the zero-based step index reaches `max_steps`.
    pub fn with_max_steps(mut self, max_steps: StepCount) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Truncate once elapsed time since the episode start reaches `max_time`.
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = Some(max_time);
        self
    }

    #[inline]
    pub fn low_steps(&self) -> StepCount {
        self.low_steps
    }

    #[inline]
    pub fn high_steps(&self) -> StepCount {
        self.high_steps
    }

    #[inline]
    pub fn step_time(&self) -> Duration {
        self.step_time
    }

    #[inline]
    pub fn max_steps(&self) -> Option<StepCount> {
        self.max_steps
    }

    #[inline]
    pub fn max_time(&self) -> Option<Duration> {
        self.max_time
    }

    /// Returns `true` if at least one truncation limit is configured.
    pub fn is_bounded(&self) -> bool {
        self.max_steps.is_some() || self.max_time.is_some()
    }
}

impl fmt::Display for EpisodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EpisodeConfig(steps={}..={}, step_time={:?}, max_steps={:?}, max_time={:?})",
            self.low_steps, self.high_steps, self.step_time, self.max_steps, self.max_time,
        )
    }
}
