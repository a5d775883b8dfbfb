use std::fmt;

use serde::{Deserialize, Serialize};

use crate::StepCount;

/// Outcome of a single episode: how many steps actually ran.
///
/// Natural completion and truncation by either policy produce the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeResult {
    pub steps_completed: StepCount,
}

impl EpisodeResult {
    #[inline]
    pub const fn new(steps_completed: StepCount) -> Self {
        Self { steps_completed }
    }
}

impl From<EpisodeResult> for StepCount {
    fn from(r: EpisodeResult) -> Self {
        r.steps_completed
    }
}

impl fmt::Display for EpisodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps", self.steps_completed)
    }
}
