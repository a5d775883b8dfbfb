mod domain;
pub use domain::{StepCount, Truncation, WorkerIdentity};

mod error;
pub use error::{ModelError, ModelResult};

mod spec;
pub use spec::{EpisodeConfig, EpisodeSpec};

mod result;
pub use result::EpisodeResult;
