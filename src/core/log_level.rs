//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The declaration order is the filtering order: a record is written only when
/// its level is greater than or equal to the logger's minimum level.
/// `Disabled` sits above everything, so using it as a minimum level silences
/// the logger, and records carrying it are never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    /// Highly detailed tracing messages, the most voluminous output
    #[default]
    Trace = 0,
    /// Relatively detailed messages used to debug the flow
    Debug = 1,
    /// Informational messages that make sense to users unfamiliar with the application
    Info = 2,
    /// Potentially harmful situations
    Warn = 3,
    /// Severe error events
    Error = 4,
    /// Nothing passes
    Disabled = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Disabled,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Disabled => "disabled",
        }
    }

    /// Parse a level name, case-insensitively.
    ///
    /// Never fails: unknown names map to [`LogLevel::Trace`]. Use
    /// `s.parse::<LogLevel>()` to reject unknown names instead.
    ///
    /// ```
    /// use rust_logger_facade::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
    /// assert_eq!(LogLevel::parse("verbose"), LogLevel::Trace);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        name.parse().unwrap_or(LogLevel::Trace)
    }

    /// Whether a record at `self` passes a gate set to `min_level`
    #[inline]
    pub fn passes(self, min_level: LogLevel) -> bool {
        self != LogLevel::Disabled && self >= min_level
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Disabled => White,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "disabled" | "none" | "off" => Ok(LogLevel::Disabled),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

// Unknown names deserialize as trace, like `LogLevel::parse`
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(LogLevel::parse(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(LogLevel::parse("Trace"), LogLevel::Trace);
        assert_eq!(LogLevel::parse("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::parse("Info"), LogLevel::Info);
        assert_eq!(LogLevel::parse("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("ERROR"), LogLevel::Error);
        assert_eq!(LogLevel::parse("Warning"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("OFF"), LogLevel::Disabled);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_trace() {
        assert_eq!(LogLevel::parse(""), LogLevel::Trace);
        assert_eq!(LogLevel::parse("loud"), LogLevel::Trace);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
        assert_eq!(err.to_string(), "unknown log level 'loud'");
    }

    #[test]
    fn test_passes_gate() {
        assert!(LogLevel::Warn.passes(LogLevel::Info));
        assert!(LogLevel::Info.passes(LogLevel::Info));
        assert!(!LogLevel::Debug.passes(LogLevel::Info));
        assert!(!LogLevel::Error.passes(LogLevel::Disabled));
        assert!(!LogLevel::Disabled.passes(LogLevel::Trace));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(level, LogLevel::Error);
        let level: LogLevel = serde_json::from_str("\"nonsense\"").unwrap();
        assert_eq!(level, LogLevel::Trace);
    }
}
