use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` directive string.
///
/// The raw string is kept for display and serialization; [`LoggerLevel::to_env_filter`] builds the filter on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Parse and validate a filter expression.
    ///
    /// ```
    /// use rollout_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("rollout_core=debug,info").unwrap();
    /// assert_eq!(lvl.as_str(), "rollout_core=debug,info");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        let s = s.into();
        EnvFilter::try_new(&s).map_err(|e| LoggerError::InvalidLevel(format!("{s}: {e}")))?;
        Ok(Self(s))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the filter. Falls back to `info` if the directive stopped parsing, which
    /// can not happen for values built through [`LoggerLevel::new`].
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_directives() {
        for ok in ["trace", "debug", "info", "warn", "error", "rollout_core=trace,info"] {
            assert!(LoggerLevel::new(ok).is_ok(), "{ok} should be valid");
        }
    }

    #[test]
    fn rejects_unknown_levels() {
        for bad in ["rollout_core=chatty", "a=info,b=what"] {
            assert!(
                matches!(bad.parse::<LoggerLevel>(), Err(LoggerError::InvalidLevel(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.to_string(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn serde_keeps_raw_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""rollout_core=debug,warn""#).unwrap();
        assert_eq!(lvl.as_str(), "rollout_core=debug,warn");
        assert_eq!(
            serde_json::to_string(&lvl).unwrap(),
            r#""rollout_core=debug,warn""#
        );
    }
}
