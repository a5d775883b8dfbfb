//! Worker identity as provided by the execution substrate.
//!
//! The runner asks for its identity exactly once, at construction, and keeps the value.
use rollout_model::WorkerIdentity;

use crate::runner::RunnerError;

/// Environment key holding the worker rank.
pub const ENV_RANK: &str = "ROLLOUT_RANK";

/// Environment key holding the pool size.
pub const ENV_POOL_SIZE: &str = "ROLLOUT_POOL_SIZE";

/// Source of a worker's rank and pool size.
pub trait IdentitySource: Send + Sync {
    fn resolve_identity(&self) -> Result<WorkerIdentity, RunnerError>;
}

/// Identity fixed ahead of time, e.g. assigned by an in-process pool.
#[derive(Debug, Clone, Copy)]
pub struct StaticIdentity(pub WorkerIdentity);

impl IdentitySource for StaticIdentity {
    fn resolve_identity(&self) -> Result<WorkerIdentity, RunnerError> {
        Ok(self.0)
    }
}

/// Identity read from [`ENV_RANK`] and [`ENV_POOL_SIZE`], as set by a launcher for each process.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvIdentity;

impl EnvIdentity {
    /// Resolve through an arbitrary key lookup instead of the process environment.
    pub fn resolve_with<F>(lookup: F) -> Result<WorkerIdentity, RunnerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rank = read_u32(&lookup, ENV_RANK)?;
        let size = read_u32(&lookup, ENV_POOL_SIZE)?;
        Ok(WorkerIdentity::new(rank, size)?)
    }
}

impl IdentitySource for EnvIdentity {
    fn resolve_identity(&self) -> Result<WorkerIdentity, RunnerError> {
        Self::resolve_with(|key| std::env::var(key).ok())
    }
}

fn read_u32<F>(lookup: &F, key: &str) -> Result<u32, RunnerError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or_else(|| RunnerError::Identity(format!("{key} is not set")))?;
    raw.trim()
        .parse()
        .map_err(|e| RunnerError::Identity(format!("{key}={raw:?}: {e}")))
}
