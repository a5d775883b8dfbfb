pub mod capability;
pub mod error;
pub mod identity;
pub mod metrics;
pub mod policy;
pub mod pool;
pub mod runner;

pub use capability::{
    Clock, FixedDraw, SeededDraw, SleepExecutor, StepDraw, StepError, StepExecutor, TokioClock,
    UniformDraw,
};
pub use error::CoreError;
pub use identity::{EnvIdentity, IdentitySource, StaticIdentity};
pub use metrics::{EpisodeOutcome, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};
pub use policy::TruncationPolicy;
pub use pool::{WorkerPool, WorkerReport};
pub use runner::{EpisodeRunner, RunnerContext, RunnerError};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::pool::{WorkerPool, WorkerReport};
    pub use crate::runner::{EpisodeRunner, RunnerContext, RunnerError};
    pub use rollout_model::{EpisodeConfig, EpisodeResult, WorkerIdentity};
}
