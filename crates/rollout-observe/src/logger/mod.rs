mod config;
mod error;
mod init;
mod object;

pub use config::{ENV_LOG_FILTER, ENV_LOG_FORMAT, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, LoggerTimer, init_local_offset};

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Can only succeed once per process; later calls return [`LoggerError::AlreadyInitialized`].
///
/// For [`LoggerTimeZone::Local`] call [`init_local_offset`] first, before any thread is spawned.
///
/// # Examples
/// ```rust
/// use rollout_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => init::text(cfg),
        LoggerFormat::Json => init::json(cfg),
        LoggerFormat::Journald => init::journald(cfg),
    }
}
