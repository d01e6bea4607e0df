//! Fluent logger builder
//!
//! Setters do not touch any configuration; they queue a [`ConfigAction`].
//! `build` replays the queue, in call order, onto fresh defaults. Later
//! actions on the same scalar option win, while static fields and context
//! extractors accumulate across calls.

use super::config::{ConfigDraft, LoggerSettings};
use super::context::ContextExtractor;
use super::field::{FieldValue, Fields};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::timestamp::TimestampFormat;
use crate::writers::{LogWriter, SharedWriter};
use std::fmt;
use std::sync::Arc;

/// One deferred configuration change
#[derive(Clone)]
pub enum ConfigAction {
    SetWriter(SharedWriter),
    SetLevel(LogLevel),
    AddStaticFields(Fields),
    AddContextExtractors(Vec<ContextExtractor>),
    ExcludeTime,
    SetTimeFormat(TimestampFormat),
    IncludeCaller,
    IncrementSkipFrames(usize),
}

impl ConfigAction {
    fn apply(&self, draft: &mut ConfigDraft) {
        match self {
            ConfigAction::SetWriter(writer) => draft.writer = Arc::clone(writer),
            ConfigAction::SetLevel(level) => draft.level = *level,
            ConfigAction::AddStaticFields(fields) => {
                for (name, value) in fields {
                    draft.static_fields.insert(name.clone(), value.clone());
                }
            }
            ConfigAction::AddContextExtractors(extractors) => {
                draft.context_extractors.extend(extractors.iter().cloned());
            }
            ConfigAction::ExcludeTime => draft.exclude_time = true,
            ConfigAction::SetTimeFormat(format) => draft.time_format = format.clone(),
            ConfigAction::IncludeCaller => draft.include_caller = true,
            ConfigAction::IncrementSkipFrames(skip) => draft.caller_skip_frames += skip,
        }
    }
}

impl fmt::Debug for ConfigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigAction::SetWriter(writer) => f.debug_tuple("SetWriter").field(&writer.name()).finish(),
            ConfigAction::SetLevel(level) => f.debug_tuple("SetLevel").field(level).finish(),
            ConfigAction::AddStaticFields(fields) => {
                f.debug_tuple("AddStaticFields").field(fields).finish()
            }
            ConfigAction::AddContextExtractors(extractors) => f
                .debug_tuple("AddContextExtractors")
                .field(&extractors.len())
                .finish(),
            ConfigAction::ExcludeTime => f.write_str("ExcludeTime"),
            ConfigAction::SetTimeFormat(format) => f.debug_tuple("SetTimeFormat").field(format).finish(),
            ConfigAction::IncludeCaller => f.write_str("IncludeCaller"),
            ConfigAction::IncrementSkipFrames(skip) => {
                f.debug_tuple("IncrementSkipFrames").field(skip).finish()
            }
        }
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use rust_logger_facade::prelude::*;
///
/// let buf = BufferWriter::new();
/// let logger = Logger::builder()
///     .set_writer(buf.clone())
///     .set_level(LogLevel::Debug)
///     .add_static_fields([("service", "api")])
///     .exclude_time()
///     .include_caller()
///     .build();
///
/// logger.debug(None, "ready");
/// assert!(buf.contents().contains("\"service\":\"api\""));
/// ```
///
/// Building does not consume the builder; building twice replays the same
/// actions onto new defaults and yields two independent loggers.
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    actions: Vec<ConfigAction>,
}

impl LoggerBuilder {
    /// Create a new builder with no queued actions
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, action: ConfigAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Set where encoded records are written
    #[must_use = "builder methods return a new value"]
    pub fn set_writer<W: LogWriter + 'static>(self, writer: W) -> Self {
        self.push(ConfigAction::SetWriter(Arc::new(writer)))
    }

    /// Same as [`set_writer`](Self::set_writer) for a writer that is already shared
    #[must_use = "builder methods return a new value"]
    pub fn set_shared_writer(self, writer: SharedWriter) -> Self {
        self.push(ConfigAction::SetWriter(writer))
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn set_level(self, level: LogLevel) -> Self {
        self.push(ConfigAction::SetLevel(level))
    }

    /// Merge fields into the set added to every record
    #[must_use = "builder methods return a new value"]
    pub fn add_static_fields<I, K, V>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.push(ConfigAction::AddStaticFields(fields))
    }

    /// Append extractors; they run in registration order
    #[must_use = "builder methods return a new value"]
    pub fn add_context_extractors<I>(self, extractors: I) -> Self
    where
        I: IntoIterator<Item = ContextExtractor>,
    {
        self.push(ConfigAction::AddContextExtractors(
            extractors.into_iter().collect(),
        ))
    }

    /// Leave the `time` field out of every record
    #[must_use = "builder methods return a new value"]
    pub fn exclude_time(self) -> Self {
        self.push(ConfigAction::ExcludeTime)
    }

    /// Render the `time` field with a strftime pattern; no effect after `exclude_time`
    #[must_use = "builder methods return a new value"]
    pub fn set_custom_time_format(self, format: impl Into<String>) -> Self {
        self.push(ConfigAction::SetTimeFormat(TimestampFormat::Custom(
            format.into(),
        )))
    }

    #[must_use = "builder methods return a new value"]
    pub fn set_time_format(self, format: TimestampFormat) -> Self {
        self.push(ConfigAction::SetTimeFormat(format))
    }

    /// Add a `caller` field holding `file:line` of the logging call
    #[must_use = "builder methods return a new value"]
    pub fn include_caller(self) -> Self {
        self.push(ConfigAction::IncludeCaller)
    }

    /// Include the caller and add `skip` frames to the base skip count
    #[must_use = "builder methods return a new value"]
    pub fn include_caller_and_skip_frames(self, skip: usize) -> Self {
        self.include_caller().increment_skip_frames(skip)
    }

    #[must_use = "builder methods return a new value"]
    pub fn increment_skip_frames(self, skip: usize) -> Self {
        self.push(ConfigAction::IncrementSkipFrames(skip))
    }

    /// Queue the actions equivalent to `settings`
    #[must_use = "builder methods return a new value"]
    pub fn apply_settings(mut self, settings: &LoggerSettings) -> Self {
        if let Some(level) = settings.level {
            self = self.set_level(level);
        }
        if !settings.static_fields.is_empty() {
            self = self.push(ConfigAction::AddStaticFields(settings.static_fields.clone()));
        }
        if settings.exclude_time {
            self = self.exclude_time();
        }
        if let Some(ref format) = settings.time_format {
            self = self.set_time_format(format.clone());
        }
        if settings.include_caller {
            self = self.include_caller_and_skip_frames(settings.caller_skip_frames);
        }
        self
    }

    pub fn actions(&self) -> &[ConfigAction] {
        &self.actions
    }

    /// Replay the queued actions onto defaults and build the logger
    pub fn build(&self) -> Logger {
        let mut draft = ConfigDraft::default();
        for action in &self.actions {
            action.apply(&mut draft);
        }
        Logger::from_configuration(draft.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BASE_CALLER_SKIP_FRAMES;
    use crate::core::context::extractor;
    use crate::writers::BufferWriter;

    #[test]
    fn test_actions_recorded_in_order() {
        let builder = LoggerBuilder::new()
            .set_level(LogLevel::Info)
            .exclude_time()
            .set_level(LogLevel::Error);

        let actions = builder.actions();
        assert_eq!(actions.len(), 3);
        assert!(matches!(actions[0], ConfigAction::SetLevel(LogLevel::Info)));
        assert!(matches!(actions[1], ConfigAction::ExcludeTime));
        assert!(matches!(actions[2], ConfigAction::SetLevel(LogLevel::Error)));
    }

    #[test]
    fn test_later_scalar_wins() {
        let logger = LoggerBuilder::new()
            .set_level(LogLevel::Info)
            .set_level(LogLevel::Error)
            .set_custom_time_format("%Y")
            .set_time_format(TimestampFormat::Iso8601)
            .build();

        let config = logger.configuration();
        assert_eq!(config.level(), LogLevel::Error);
        assert_eq!(config.time_field_configuration().1, &TimestampFormat::Iso8601);
    }

    #[test]
    fn test_static_fields_merge() {
        let logger = LoggerBuilder::new()
            .add_static_fields([("one", 1), ("two", 2)])
            .add_static_fields([("two", 22), ("three", 3)])
            .build();

        let fields = logger.configuration().static_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["one"], FieldValue::Int(1));
        assert_eq!(fields["two"], FieldValue::Int(22));
        assert_eq!(fields["three"], FieldValue::Int(3));
    }

    #[test]
    fn test_extractors_append() {
        let logger = LoggerBuilder::new()
            .add_context_extractors([extractor(|_| Fields::new())])
            .add_context_extractors([extractor(|_| Fields::new()), extractor(|_| Fields::new())])
            .build();

        assert_eq!(logger.configuration().context_extractors().len(), 3);
    }

    #[test]
    fn test_skip_frames_accumulate() {
        let logger = LoggerBuilder::new()
            .include_caller_and_skip_frames(2)
            .increment_skip_frames(3)
            .build();

        assert_eq!(
            logger.configuration().caller_configuration(),
            (true, BASE_CALLER_SKIP_FRAMES + 5)
        );
    }

    #[test]
    fn test_build_twice_is_independent() {
        let first = BufferWriter::new();
        let builder = LoggerBuilder::new().set_writer(first.clone()).exclude_time();

        let a = builder.build();
        let b = builder.build();
        a.info(None, "from a");
        b.info(None, "from b");

        assert_eq!(first.lines().len(), 2);
        assert_eq!(builder.actions().len(), 2);
    }

    #[test]
    fn test_apply_settings() {
        let settings = LoggerSettings {
            level: Some(LogLevel::Warn),
            exclude_time: true,
            time_format: None,
            include_caller: true,
            caller_skip_frames: 4,
            static_fields: [("env".to_string(), FieldValue::from("prod"))].into_iter().collect(),
        };

        let logger = LoggerBuilder::new().apply_settings(&settings).build();
        let config = logger.configuration();
        assert_eq!(config.level(), LogLevel::Warn);
        assert!(config.time_field_configuration().0);
        assert_eq!(config.caller_configuration(), (true, BASE_CALLER_SKIP_FRAMES + 4));
        assert_eq!(config.static_fields()["env"], FieldValue::from("prod"));
    }

    #[test]
    fn test_apply_settings_then_override() {
        let settings = LoggerSettings {
            level: Some(LogLevel::Warn),
            ..LoggerSettings::default()
        };

        let logger = LoggerBuilder::new()
            .apply_settings(&settings)
            .set_level(LogLevel::Debug)
            .build();
        assert_eq!(logger.configuration().level(), LogLevel::Debug);
    }
}
