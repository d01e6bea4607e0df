//! Error types for the logger facade
//!
//! Logging calls never return these. They come from writers, strict level
//! parsing and settings loading.

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level name outside the known set
    #[error("unknown log level '{name}'")]
    InvalidLevel { name: String },

    /// IO failure on a named target (a file path, `stderr`, ...)
    #[error("{operation} '{target}' failed: {source}")]
    Io {
        operation: &'static str,
        target: String,
        #[source]
        source: io::Error,
    },

    /// IO failure without a known target
    #[error("IO error: {0}")]
    Unlocated(#[from] io::Error),

    /// Settings or record JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A settings value that parses but cannot be used
    #[error("invalid setting `{setting}`: {reason}")]
    InvalidSetting { setting: String, reason: String },
}

impl LoggerError {
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel { name: name.into() }
    }

    /// IO failure while performing `operation` on `target`
    pub fn io(operation: &'static str, target: impl Into<String>, source: io::Error) -> Self {
        LoggerError::Io {
            operation,
            target: target.into(),
            source,
        }
    }

    pub fn invalid_setting(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::InvalidSetting {
            setting: setting.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        assert_eq!(
            LoggerError::invalid_level("chatty").to_string(),
            "unknown log level 'chatty'"
        );
        assert_eq!(
            LoggerError::invalid_setting("time_format", "custom pattern is empty").to_string(),
            "invalid setting `time_format`: custom pattern is empty"
        );
    }

    #[test]
    fn test_io_keeps_source() {
        let err = LoggerError::io(
            "writing to",
            "stderr",
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        );

        assert_eq!(err.to_string(), "writing to 'stderr' failed: pipe closed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LoggerError::from(json_err), LoggerError::Json(_)));

        let io_err = io::Error::new(io::ErrorKind::Other, "gone");
        assert!(matches!(LoggerError::from(io_err), LoggerError::Unlocated(_)));
    }
}
