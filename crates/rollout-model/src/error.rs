use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid step range: low_steps ({low}) > high_steps ({high})")]
    InvalidRange { low: u64, high: u64 },

    #[error("negative value for {field}: {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("invalid duration for {field}: {reason}")]
    InvalidDuration { field: &'static str, reason: String },

    #[error("invalid worker identity: rank {rank} is outside pool of size {pool_size}")]
    InvalidIdentity { rank: u32, pool_size: u32 },

    #[error("unknown truncation kind: {0}")]
    UnknownTruncation(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
