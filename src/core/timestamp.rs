//! Rendering of the `time` field

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How the `time` field of a record is rendered. Always UTC.
///
/// ```
/// use rust_logger_facade::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at), "2024-03-09T07:05:01Z");
/// assert_eq!(TimestampFormat::Custom("%H:%M".into()).format(&at), "07:05");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Whole seconds, `2024-03-09T07:05:01Z`
    #[default]
    Rfc3339,
    /// Milliseconds, `2024-03-09T07:05:01.250Z`
    Iso8601,
    /// Microseconds, `2024-03-09T07:05:01.250042Z`
    Iso8601Micros,
    /// Any chrono strftime pattern, e.g. `"%a %b %d %H:%M:%S %z %Y"`
    Custom(String),
}

impl TimestampFormat {
    /// Render `at`; a custom pattern chrono cannot render falls back to RFC 3339
    #[must_use]
    pub fn format(&self, at: &DateTime<Utc>) -> String {
        let precision = match self {
            TimestampFormat::Rfc3339 => SecondsFormat::Secs,
            TimestampFormat::Iso8601 => SecondsFormat::Millis,
            TimestampFormat::Iso8601Micros => SecondsFormat::Micros,
            TimestampFormat::Custom(pattern) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", at.format(pattern)) {
                    Ok(()) => return rendered,
                    Err(_) => SecondsFormat::Secs,
                }
            }
        };
        at.to_rfc3339_opts(precision, true)
    }

    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }

    /// Equivalent strftime pattern, usable to parse rendered values back
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            TimestampFormat::Rfc3339 => "%Y-%m-%dT%H:%M:%SZ",
            TimestampFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3fZ",
            TimestampFormat::Iso8601Micros => "%Y-%m-%dT%H:%M:%S%.6fZ",
            TimestampFormat::Custom(pattern) => pattern,
        }
    }
}
