use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Identity of a worker inside a pool, as handed out by the execution substrate.
///
/// The runner does not own this value; it is resolved once when the runner is built and stays read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIdentity", rename_all = "camelCase")]
pub struct WorkerIdentity {
    rank: u32,
    pool_size: u32,
}

impl WorkerIdentity {
    /// Build an identity, rejecting an empty pool or a rank outside of it.
    pub fn new(rank: u32, pool_size: u32) -> ModelResult<Self> {
        if pool_size == 0 || rank >= pool_size {
            return Err(ModelError::InvalidIdentity { rank, pool_size });
        }
        Ok(Self { rank, pool_size })
    }

    /// Identity of the only worker in a pool of one.
    pub const fn single() -> Self {
        Self {
            rank: 0,
            pool_size: 1,
        }
    }

    /// Zero-based ordinal of this worker.
    #[inline]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// Total number of workers in the pool.
    #[inline]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }
}

impl Default for WorkerIdentity {
    fn default() -> Self {
        Self::single()
    }
}

impl fmt::Display for WorkerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}]", self.rank, self.pool_size)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIdentity {
    rank: u32,
    pool_size: u32,
}

impl TryFrom<RawIdentity> for WorkerIdentity {
    type Error = ModelError;
    fn try_from(raw: RawIdentity) -> Result<Self, Self::Error> {
        Self::new(raw.rank, raw.pool_size)
    }
}
