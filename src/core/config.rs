//! Logger configuration
//!
//! - `LoggerConfiguration`: the immutable snapshot a [`Logger`](super::Logger) is built from
//! - `LoggerSettings`: the serializable subset, loadable from JSON

use super::context::ContextExtractor;
use super::encoder::Encoder;
use super::error::{LoggerError, Result};
use super::field::Fields;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use crate::writers::{self, SharedWriter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Frames between a user's call site and the point where the caller is
/// resolved, for a call made directly on the logger
pub const BASE_CALLER_SKIP_FRAMES: usize = 2;

/// Mutable target the builder's actions are replayed onto
#[derive(Clone)]
pub(crate) struct ConfigDraft {
    pub(crate) writer: SharedWriter,
    pub(crate) level: LogLevel,
    pub(crate) static_fields: Fields,
    pub(crate) context_extractors: Vec<ContextExtractor>,
    pub(crate) exclude_time: bool,
    pub(crate) time_format: TimestampFormat,
    pub(crate) include_caller: bool,
    pub(crate) caller_skip_frames: usize,
}

impl Default for ConfigDraft {
    fn default() -> Self {
        Self {
            writer: writers::stderr(),
            level: LogLevel::Trace,
            static_fields: Fields::new(),
            context_extractors: Vec::new(),
            exclude_time: false,
            time_format: TimestampFormat::default(),
            include_caller: false,
            caller_skip_frames: BASE_CALLER_SKIP_FRAMES,
        }
    }
}

impl ConfigDraft {
    pub(crate) fn finish(self) -> LoggerConfiguration {
        let encoder = Encoder::new(self.writer.clone(), self.level);
        LoggerConfiguration {
            writer: self.writer,
            level: self.level,
            static_fields: self.static_fields,
            context_extractors: self.context_extractors,
            exclude_time: self.exclude_time,
            time_format: self.time_format,
            include_caller: self.include_caller,
            caller_skip_frames: self.caller_skip_frames,
            encoder,
        }
    }
}

/// Read-only view of everything a logger was built with
pub struct LoggerConfiguration {
    writer: SharedWriter,
    level: LogLevel,
    static_fields: Fields,
    context_extractors: Vec<ContextExtractor>,
    exclude_time: bool,
    time_format: TimestampFormat,
    include_caller: bool,
    caller_skip_frames: usize,
    encoder: Encoder,
}

impl LoggerConfiguration {
    /// Minimum level a record needs to be written
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn writer(&self) -> &SharedWriter {
        &self.writer
    }

    /// Fields added to every record
    pub fn static_fields(&self) -> &Fields {
        &self.static_fields
    }

    pub fn context_extractors(&self) -> &[ContextExtractor] {
        &self.context_extractors
    }

    /// `(excluded, format)` of the `time` field
    pub fn time_field_configuration(&self) -> (bool, &TimestampFormat) {
        (self.exclude_time, &self.time_format)
    }

    /// `(included, frames to skip)` for the `caller` field
    pub fn caller_configuration(&self) -> (bool, usize) {
        (self.include_caller, self.caller_skip_frames)
    }

    /// The encoder records are written through
    pub fn implementation(&self) -> &Encoder {
        &self.encoder
    }
}

impl fmt::Debug for LoggerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfiguration")
            .field("writer", &self.writer.name())
            .field("level", &self.level)
            .field("static_fields", &self.static_fields)
            .field("context_extractors", &self.context_extractors.len())
            .field("exclude_time", &self.exclude_time)
            .field("time_format", &self.time_format)
            .field("include_caller", &self.include_caller)
            .field("caller_skip_frames", &self.caller_skip_frames)
            .finish()
    }
}

/// Serializable logger options.
///
/// Writers and extractors are code, not data, so they stay on the builder.
///
/// ```
/// use rust_logger_facade::{LogLevel, Logger, LoggerSettings};
///
/// let settings = LoggerSettings::from_json(r#"{
///     "level": "warn",
///     "exclude_time": true,
///     "static_fields": {"service": "billing"}
/// }"#).unwrap();
///
/// let logger = Logger::builder().apply_settings(&settings).build();
/// assert_eq!(logger.configuration().level(), LogLevel::Warn);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    pub level: Option<LogLevel>,
    pub exclude_time: bool,
    pub time_format: Option<TimestampFormat>,
    pub include_caller: bool,
    /// Extra frames on top of the base skip; only meaningful with `include_caller`
    pub caller_skip_frames: usize,
    pub static_fields: Fields,
}

impl LoggerSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: LoggerSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io("reading settings from", path.display().to_string(), e)
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(TimestampFormat::Custom(ref pattern)) = self.time_format {
            if pattern.trim().is_empty() {
                return Err(LoggerError::invalid_setting(
                    "time_format",
                    "custom pattern is empty",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;

    #[test]
    fn test_draft_defaults() {
        let config = ConfigDraft::default().finish();

        assert_eq!(config.level(), LogLevel::Trace);
        assert_eq!(config.writer().name(), "stderr");
        assert!(config.static_fields().is_empty());
        assert!(config.context_extractors().is_empty());
        assert_eq!(config.time_field_configuration(), (false, &TimestampFormat::Rfc3339));
        assert_eq!(config.caller_configuration(), (false, BASE_CALLER_SKIP_FRAMES));
        assert_eq!(config.implementation().min_level(), LogLevel::Trace);
    }

    #[test]
    fn test_settings_from_json() {
        let settings = LoggerSettings::from_json(
            r#"{"level":"Debug","include_caller":true,"caller_skip_frames":1,
                "time_format":"Iso8601","static_fields":{"region":"eu-1","shard":3}}"#,
        )
        .unwrap();

        assert_eq!(settings.level, Some(LogLevel::Debug));
        assert!(settings.include_caller);
        assert_eq!(settings.caller_skip_frames, 1);
        assert_eq!(settings.time_format, Some(TimestampFormat::Iso8601));
        assert_eq!(settings.static_fields["shard"], FieldValue::Int(3));
    }

    #[test]
    fn test_settings_empty_object_is_default() {
        let settings = LoggerSettings::from_json("{}").unwrap();
        assert_eq!(settings, LoggerSettings::default());
    }

    #[test]
    fn test_settings_unknown_level_is_trace() {
        let settings = LoggerSettings::from_json(r#"{"level":"chatty"}"#).unwrap();
        assert_eq!(settings.level, Some(LogLevel::Trace));
    }

    #[test]
    fn test_settings_rejects_empty_custom_format() {
        let err = LoggerSettings::from_json(r#"{"time_format":{"Custom":"  "}}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidSetting { .. }));
    }

    #[test]
    fn test_settings_malformed_json() {
        let err = LoggerSettings::from_json("{level").unwrap_err();
        assert!(matches!(err, LoggerError::Json(_)));
    }

    #[test]
    fn test_settings_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("logger.json");
        std::fs::write(&path, r#"{"exclude_time":true}"#)?;

        let settings = LoggerSettings::from_json_file(&path)?;
        assert!(settings.exclude_time);

        let missing = LoggerSettings::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(LoggerError::Io { .. })));
        Ok(())
    }
}
