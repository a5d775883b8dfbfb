use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Policy that cut an episode short.
///
/// This is instrumentation only: an [`crate::EpisodeResult`] never carries it,
/// so a truncated episode looks exactly like one that completed naturally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Truncation {
    /// The zero-based step index reached `max_steps`.
    StepLimit,
    /// Elapsed time since the episode started reached `max_time`.
    TimeLimit,
}

impl Truncation {
    /// Returns the truncation kind as a static label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Truncation::StepLimit => "step_limit",
            Truncation::TimeLimit => "time_limit",
        }
    }
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for Truncation {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step_limit" | "steps" => Ok(Truncation::StepLimit),
            "time_limit" | "time" => Ok(Truncation::TimeLimit),
            other => Err(ModelError::UnknownTruncation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_short_forms() {
        assert_eq!("step_limit".parse::<Truncation>().unwrap(), Truncation::StepLimit);
        assert_eq!(" Steps ".parse::<Truncation>().unwrap(), Truncation::StepLimit);
        assert_eq!("TIME".parse::<Truncation>().unwrap(), Truncation::TimeLimit);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "deadline".parse::<Truncation>().unwrap_err();
        assert_eq!(err, ModelError::UnknownTruncation("deadline".into()));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Truncation::TimeLimit.to_string(), "time_limit");
    }
}
