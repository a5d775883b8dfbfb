use std::sync::Arc;

use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
    proto::MetricFamily,
};

use rollout_core::{EpisodeOutcome, MetricsBackend};

/// Prometheus metrics backend for episode runners.
///
/// ## Label cardinality
/// - `rank`: bounded by the pool size
/// - `outcome`: "completed", "truncated_steps", "truncated_time", "aborted"
/// - `error_kind`: "identity", "config", ...
#[derive(Clone)]
pub struct PrometheusMetrics {
    episodes_started: CounterVec,
    episodes_finished: CounterVec,
    episode_steps: HistogramVec,
    episode_duration: HistogramVec,
    runner_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering its metrics in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let episodes_started = CounterVec::new(
            Opts::new("episodes_started_total", "Total number of episodes started")
                .namespace("rollout"),
            &["rank"],
        )?;
        registry.register(Box::new(episodes_started.clone()))?;

        let episodes_finished = CounterVec::new(
            Opts::new(
                "episodes_finished_total",
                "Total number of episodes that reached a terminal state",
            )
            .namespace("rollout"),
            &["outcome"],
        )?;
        registry.register(Box::new(episodes_finished.clone()))?;

        let episode_steps = HistogramVec::new(
            HistogramOpts::new("episode_steps", "Steps completed per episode")
                .namespace("rollout")
                .buckets(vec![1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 500.0, 1000.0]),
            &["outcome"],
        )?;
        registry.register(Box::new(episode_steps.clone()))?;

        let episode_duration = HistogramVec::new(
            HistogramOpts::new(
                "episode_duration_seconds",
                "Wall-clock duration of the episode step loop in seconds",
            )
            .namespace("rollout")
            .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0]),
            &["outcome"],
        )?;
        registry.register(Box::new(episode_duration.clone()))?;

        let runner_errors = CounterVec::new(
            Opts::new("runner_errors_total", "Total runner-level errors").namespace("rollout"),
            &["error_kind"],
        )?;
        registry.register(Box::new(runner_errors.clone()))?;

        Ok(Self {
            episodes_started,
            episodes_finished,
            episode_steps,
            episode_duration,
            runner_errors,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metric families for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Render the registry in the Prometheus text format.
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_episode_started(&self, rank: u32) {
        self.episodes_started
            .with_label_values(&[rank.to_string().as_str()])
            .inc();
    }

    fn record_episode_finished(&self, outcome: EpisodeOutcome, steps: u64, duration_ms: u64) {
        let label = outcome.as_label();
        self.episodes_finished.with_label_values(&[label]).inc();
        if outcome != EpisodeOutcome::Aborted {
            self.episode_steps
                .with_label_values(&[label])
                .observe(steps as f64);
        }
        self.episode_duration
            .with_label_values(&[label])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_runner_error(&self, error_kind: &str) {
        self.runner_errors.with_label_values(&[error_kind]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family<'a>(families: &'a [MetricFamily], name: &str) -> &'a MetricFamily {
        families
            .iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("metric {name} not found"))
    }

    #[test]
    fn started_is_labelled_by_rank() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_episode_started(0);
        metrics.record_episode_started(0);
        metrics.record_episode_started(3);

        let families = metrics.gather();
        let started = family(&families, "rollout_episodes_started_total");
        assert_eq!(started.get_metric().len(), 2);
    }

    #[test]
    fn finished_splits_by_outcome() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_episode_finished(EpisodeOutcome::Completed, 12, 2400);
        metrics.record_episode_finished(EpisodeOutcome::TruncatedByTime, 10, 2000);
        metrics.record_episode_finished(EpisodeOutcome::TruncatedByTime, 10, 2010);
        metrics.record_episode_finished(EpisodeOutcome::Aborted, 0, 300);

        let families = metrics.gather();
        assert_eq!(
            family(&families, "rollout_episodes_finished_total")
                .get_metric()
                .len(),
            3
        );
        assert_eq!(
            family(&families, "rollout_episode_duration_seconds")
                .get_metric()
                .len(),
            3
        );
        // aborted episodes have no step count
        assert_eq!(
            family(&families, "rollout_episode_steps").get_metric().len(),
            2
        );
    }

    #[test]
    fn runner_errors_are_counted() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_runner_error("identity");
        metrics.record_runner_error("identity");

        let families = metrics.gather();
        let errors = family(&families, "rollout_runner_errors_total");
        assert_eq!(errors.get_metric().len(), 1);

        let text = metrics.encode_text().unwrap();
        assert!(text.contains("rollout_runner_errors_total{error_kind=\"identity\"} 2"));
    }

    #[test]
    fn text_encoding_contains_metric_names() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.record_episode_started(1);
        let text = metrics.encode_text().unwrap();
        assert!(text.contains("rollout_episodes_started_total{rank=\"1\"} 1"));
    }

    #[test]
    fn shared_registry_rejects_double_registration() {
        let registry = Arc::new(Registry::new());
        let _first = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();
        assert!(PrometheusMetrics::new_with_registry(registry).is_err());
    }
}
