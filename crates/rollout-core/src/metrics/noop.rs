use crate::metrics::backend::{EpisodeOutcome, MetricsBackend};

/// Metrics backend that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_episode_started(&self, _: u32) {}

    #[inline(always)]
    fn record_episode_finished(&self, _: EpisodeOutcome, _: u64, _: u64) {}

    #[inline(always)]
    fn record_runner_error(&self, _: &str) {}
}
