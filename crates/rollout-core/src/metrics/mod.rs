//! Metrics collection seam for episode runners.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected through [`crate::RunnerContext`].
mod backend;
pub use backend::{EpisodeOutcome, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
