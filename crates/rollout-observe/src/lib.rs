//! Logging setup shared by rollout binaries.
mod logger;
pub use logger::*;
