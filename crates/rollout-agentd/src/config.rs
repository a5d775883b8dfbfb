use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use rollout_model::EpisodeSpec;
use rollout_observe::LoggerConfig;

/// Environment variable naming the config file when no path is passed on the command line.
pub const ENV_CONFIG: &str = "ROLLOUT_CONFIG";

/// Top-level agent configuration.
///
/// Every field is optional in the file; the defaults reproduce the stock demo:
/// four workers, one round, 1..=20 steps of 200ms, truncated after 2s.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentConfig {
    pub logger: LoggerConfig,
    /// Number of workers in the pool.
    pub pool_size: u32,
    /// How many times every worker runs an episode.
    pub rounds: u32,
    /// Seed for reproducible step-count draws. Unseeded draws use the thread RNG.
    pub seed: Option<u64>,
    pub episode: EpisodeSpec,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            logger: LoggerConfig::default(),
            pool_size: 4,
            rounds: 1,
            seed: None,
            episode: EpisodeSpec::default(),
        }
    }
}

impl AgentConfig {
    /// Parse a JSON config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from the first CLI argument, then [`ENV_CONFIG`], else defaults.
    pub fn load(arg: Option<String>) -> anyhow::Result<Self> {
        match arg.or_else(|| std::env::var(ENV_CONFIG).ok()) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
