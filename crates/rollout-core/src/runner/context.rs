use std::{fmt, sync::Arc};

use crate::{
    capability::{Clock, SleepExecutor, StepDraw, StepExecutor, TokioClock, UniformDraw},
    metrics::MetricsHandle,
};

/// Capabilities shared by episode runners.
///
/// Cloning is cheap: every field is a shared handle.
#[derive(Clone)]
pub struct RunnerContext {
    draw: Arc<dyn StepDraw>,
    clock: Arc<dyn Clock>,
    executor: Arc<dyn StepExecutor>,
    metrics: MetricsHandle,
}

impl RunnerContext {
    pub fn draw(&self) -> &Arc<dyn StepDraw> {
        &self.draw
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn executor(&self) -> &Arc<dyn StepExecutor> {
        &self.executor
    }

    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    /// Replace the target step count source.
    pub fn with_draw(mut self, draw: Arc<dyn StepDraw>) -> Self {
        self.draw = draw;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the step executor.
    pub fn with_executor(mut self, executor: Arc<dyn StepExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Replace the metrics backend.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Default for RunnerContext {
    fn default() -> Self {
        Self {
            draw: Arc::new(UniformDraw),
            clock: Arc::new(TokioClock),
            executor: Arc::new(SleepExecutor::new()),
            metrics: crate::metrics::noop_metrics(),
        }
    }
}

impl fmt::Debug for RunnerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerContext")
            .field("draw", &"<handle>")
            .field("clock", &"<handle>")
            .field("executor", &"<handle>")
            .field("metrics", &"<handle>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::FixedDraw;

    #[test]
    fn default_draws_uniformly_within_range() {
        let ctx = RunnerContext::default();
        for _ in 0..100 {
            let v = ctx.draw().draw(2, 4);
            assert!((2..=4).contains(&v));
        }
    }

    #[test]
    fn with_draw_replaces_source() {
        let ctx = RunnerContext::default().with_draw(Arc::new(FixedDraw(7)));
        assert_eq!(ctx.draw().draw(1, 20), 7);
    }

    #[test]
    fn debug_hides_handles() {
        let s = format!("{:?}", RunnerContext::default());
        assert!(s.starts_with("RunnerContext"));
        assert!(s.contains("<handle>"));
    }
}
