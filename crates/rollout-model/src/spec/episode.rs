use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    EpisodeConfig,
    error::{ModelError, ModelResult},
};

/// Declarative, loosely typed episode description as it appears in config files.
///
/// Counts are signed and durations are float seconds so that bad input reaches validation
/// instead of failing deep inside the deserializer. Convert with [`EpisodeConfig::try_from`].
///
/// Missing fields fall back to the demo workload: 1..=20 steps of 200ms with a 2s time limit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeSpec {
    /// Inclusive lower bound of the drawn step count.
    pub low_steps: i64,
    /// Inclusive upper bound of the drawn step count.
    pub high_steps: i64,
    /// Simulated cost of a single step, in seconds.
    pub step_time_secs: f64,
    /// Zero-based step index at which the episode is truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<i64>,
    /// Elapsed seconds after which the episode is truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time_secs: Option<f64>,
}

impl Default for EpisodeSpec {
    fn default() -> Self {
        Self {
            low_steps: 1,
            high_steps: 20,
            step_time_secs: 0.2,
            max_steps: None,
            max_time_secs: Some(2.0),
        }
    }
}

impl TryFrom<&EpisodeSpec> for EpisodeConfig {
    type Error = ModelError;
    fn try_from(spec: &EpisodeSpec) -> ModelResult<Self> {
        let low = non_negative("lowSteps", spec.low_steps)?;
        let high = non_negative("highSteps", spec.high_steps)?;
        let step_time = secs("stepTimeSecs", spec.step_time_secs)?;

        let mut cfg = EpisodeConfig::new(low, high, step_time)?;
        if let Some(max_steps) = spec.max_steps {
            cfg = cfg.with_max_steps(non_negative("maxSteps", max_steps)?);
        }
        if let Some(max_time) = spec.max_time_secs {
            cfg = cfg.with_max_time(secs("maxTimeSecs", max_time)?);
        }
        Ok(cfg)
    }
}

impl TryFrom<EpisodeSpec> for EpisodeConfig {
    type Error = ModelError;
    fn try_from(spec: EpisodeSpec) -> ModelResult<Self> {
        EpisodeConfig::try_from(&spec)
    }
}

fn non_negative(field: &'static str, value: i64) -> ModelResult<u64> {
    u64::try_from(value).map_err(|_| ModelError::Negative { field, value })
}

fn secs(field: &'static str, value: f64) -> ModelResult<Duration> {
    Duration::try_from_secs_f64(value).map_err(|e| ModelError::InvalidDuration {
        field,
        reason: format!("{value}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(low: i64, high: i64, step: f64) -> EpisodeSpec {
        EpisodeSpec {
            low_steps: low,
            high_steps: high,
            step_time_secs: step,
            max_steps: None,
            max_time_secs: None,
        }
    }

    #[test]
    fn default_matches_demo_workload() {
        let cfg = EpisodeConfig::try_from(EpisodeSpec::default()).unwrap();
        assert_eq!(cfg.low_steps(), 1);
        assert_eq!(cfg.high_steps(), 20);
        assert_eq!(cfg.step_time(), Duration::from_millis(200));
        assert_eq!(cfg.max_steps(), None);
        assert_eq!(cfg.max_time(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn converts_limits() {
        let s = EpisodeSpec {
            max_steps: Some(2),
            max_time_secs: Some(2.5),
            ..spec(5, 5, 0.1)
        };
        let cfg = EpisodeConfig::try_from(&s).unwrap();
        assert_eq!(cfg.max_steps(), Some(2));
        assert_eq!(cfg.max_time(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn rejects_negative_counts() {
        let err = EpisodeConfig::try_from(spec(-1, 3, 0.1)).unwrap_err();
        assert_eq!(
            err,
            ModelError::Negative {
                field: "lowSteps",
                value: -1
            }
        );

        let s = EpisodeSpec {
            max_steps: Some(-3),
            ..spec(1, 3, 0.1)
        };
        assert!(matches!(
            EpisodeConfig::try_from(s),
            Err(ModelError::Negative {
                field: "maxSteps",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_durations() {
        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            let err = EpisodeConfig::try_from(spec(1, 3, bad)).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidDuration { field: "stepTimeSecs", .. }),
                "unexpected error for {bad}: {err:?}"
            );
        }

        let s = EpisodeSpec {
            max_time_secs: Some(-1.0),
            ..spec(1, 3, 0.1)
        };
        assert!(matches!(
            EpisodeConfig::try_from(s),
            Err(ModelError::InvalidDuration {
                field: "maxTimeSecs",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = EpisodeConfig::try_from(spec(10, 3, 0.0)).unwrap_err();
        assert_eq!(err, ModelError::InvalidRange { low: 10, high: 3 });
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let s: EpisodeSpec = serde_json::from_str(r#"{"lowSteps": 3, "highSteps": 3}"#).unwrap();
        assert_eq!(s.low_steps, 3);
        assert_eq!(s.high_steps, 3);
        assert_eq!(s.step_time_secs, 0.2);
        assert_eq!(s.max_time_secs, Some(2.0));
    }

    #[test]
    fn explicit_null_clears_default_time_limit() {
        let s: EpisodeSpec = serde_json::from_str(r#"{"maxTimeSecs": null}"#).unwrap();
        assert_eq!(s.max_time_secs, None);
        let cfg = EpisodeConfig::try_from(s).unwrap();
        assert!(!cfg.is_bounded());
    }
}
