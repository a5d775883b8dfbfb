use tokio::time::Instant;

/// Monotonic clock read by the episode loop.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by [`tokio::time::Instant`].
///
/// Under a paused tokio runtime this follows the virtual clock, so sleeping executors
/// and elapsed-time checks advance together without real waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn follows_paused_runtime() {
        let clock = TokioClock;
        let start = clock.now();
        tokio::time::sleep(Duration::from_secs(3)).await;
        let elapsed = clock.now() - start;
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_secs(3) + Duration::from_millis(5));
    }
}
