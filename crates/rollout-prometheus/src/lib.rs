//! Prometheus metrics backend for rollout episode runners.
//!
//! [`PrometheusMetrics`] implements [`rollout_core::MetricsBackend`]; inject it through
//! [`rollout_core::RunnerContext::with_metrics`] and expose [`PrometheusMetrics::gather`] however the host application serves metrics.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use rollout_core::RunnerContext;
//! use rollout_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let ctx = RunnerContext::default().with_metrics(Arc::new(metrics.clone()));
//! # let _ = ctx;
//! let text = metrics.encode_text()?;
//! assert!(text.is_empty() || text.contains("rollout_"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `rollout_episodes_started_total{rank}` - Counter
//! - `rollout_episodes_finished_total{outcome}` - Counter
//! - `rollout_episode_steps{outcome}` - Histogram
//! - `rollout_episode_duration_seconds{outcome}` - Histogram
//! - `rollout_runner_errors_total{error_kind}` - Counter

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
