use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use super::LoggerTimeZone;

/// RFC 3339 timestamps in the configured timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerTimer {
    tz: LoggerTimeZone,
}

impl LoggerTimer {
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self { tz }
    }

    /// Format `at` the way it appears in log lines.
    pub fn render(&self, at: OffsetDateTime) -> String {
        at.to_offset(self.tz.offset())
            .format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for LoggerTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", self.render(OffsetDateTime::now_utc()))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn utc_renders_with_z_suffix() {
        let timer = LoggerTimer::new(LoggerTimeZone::Utc);
        assert_eq!(
            timer.render(datetime!(2024-03-01 12:30:00 UTC)),
            "2024-03-01T12:30:00Z"
        );
    }

    #[test]
    fn offset_is_applied() {
        let timer = LoggerTimer::default();
        let rendered = timer.render(datetime!(2024-03-01 14:30:00 +02:00));
        assert_eq!(rendered, "2024-03-01T12:30:00Z");
    }
}
