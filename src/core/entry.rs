//! Per-call accumulator
//!
//! An [`Entry`] collects fields and an error for exactly one logging call and
//! is consumed by the level method that ends the chain, so state can never
//! leak from one call into the next.

use super::caller::Caller;
use super::config::{LoggerConfiguration, BASE_CALLER_SKIP_FRAMES};
use super::context::{Context, ContextExtractor};
use super::field::{FieldValue, Fields};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::message::Message;
use super::record::{LogRecord, PANIC_FIELD};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};

/// Fields and error gathered for one logging call
///
/// Obtained from [`Logger::with_field`], [`Logger::with_fields`] or
/// [`Logger::with_error`]:
///
/// ```
/// use rust_logger_facade::{BufferWriter, Logger};
///
/// let buf = BufferWriter::new();
/// let logger = Logger::builder().set_writer(buf.clone()).exclude_time().build();
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "bad");
/// logger.with_field("one", 1).with_error(&err).info(None, "x");
///
/// let line: serde_json::Value = serde_json::from_str(&buf.contents()).unwrap();
/// assert_eq!(line["one"], 1);
/// assert_eq!(line["error"], "bad");
/// assert_eq!(line["message"], "x");
/// ```
#[must_use = "an entry writes nothing until a level method is called"]
pub struct Entry<'a> {
    logger: &'a Logger,
    fields: Fields,
    error: Option<String>,
    chained: bool,
}

impl<'a> Entry<'a> {
    /// Entry for a level method called straight on the logger
    pub(crate) fn direct(logger: &'a Logger) -> Self {
        Self::new(logger, false)
    }

    /// Entry started by `with_field`/`with_error`, one frame further from the caller
    pub(crate) fn chained(logger: &'a Logger) -> Self {
        Self::new(logger, true)
    }

    fn new(logger: &'a Logger, chained: bool) -> Self {
        Self {
            logger,
            fields: Fields::new(),
            error: None,
            chained,
        }
    }

    /// Add a field; a later field with the same name replaces it
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (name, value) in fields {
            self.fields.insert(name.into(), value.into());
        }
        self
    }

    /// Attach an error; only the last one attached is written
    pub fn with_error<E: fmt::Display>(mut self, err: E) -> Self {
        self.error = Some(err.to_string());
        self
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn attached_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[track_caller]
    pub fn trace<'m>(self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        self.emit(ctx, LogLevel::Trace, 0, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn debug<'m>(self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        self.emit(ctx, LogLevel::Debug, 0, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn info<'m>(self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        self.emit(ctx, LogLevel::Info, 0, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn warn<'m>(self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        self.emit(ctx, LogLevel::Warn, 0, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn error<'m>(self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        self.emit(ctx, LogLevel::Error, 0, message.into(), Location::caller());
    }

    /// Log at `level`, reporting the caller `extra_skip_frames` frames above this call
    #[track_caller]
    pub fn custom<'m>(
        self,
        ctx: Option<&Context>,
        level: LogLevel,
        extra_skip_frames: usize,
        message: impl Into<Message<'m>>,
    ) {
        self.emit(ctx, level, extra_skip_frames, message.into(), Location::caller());
    }

    /// Frames between the user's call site and emission for this entry
    pub(crate) fn caller_depth(&self, config: &LoggerConfiguration, extra_skip_frames: usize) -> usize {
        let (_, base) = config.caller_configuration();
        base + extra_skip_frames + usize::from(self.chained)
    }

    fn emit(
        mut self,
        ctx: Option<&Context>,
        level: LogLevel,
        extra_skip_frames: usize,
        message: Message<'_>,
        location: &'static Location<'static>,
    ) {
        let logger = self.logger;
        let config = logger.configuration();
        let encoder = config.implementation();
        if !encoder.enabled(level) {
            return;
        }

        if let Some(ctx) = ctx {
            self.extract_from_context(ctx, config.context_extractors());
        }

        let mut record = LogRecord::new(level).with_fields(config.static_fields());

        let (exclude_time, time_format) = config.time_field_configuration();
        if !exclude_time {
            record = record.with_timestamp(time_format.now());
        }

        let (include_caller, configured_skip) = config.caller_configuration();
        if include_caller {
            let depth = self.caller_depth(config, extra_skip_frames);
            let frames_above =
                extra_skip_frames + configured_skip.saturating_sub(BASE_CALLER_SKIP_FRAMES);
            record = record.with_caller(Caller::resolve(location, frames_above, depth));
        }

        let Entry { fields, error, .. } = self;
        if let Some(error) = error {
            record = record.with_error(error);
        }
        record.fields.extend(fields);
        record = record.with_message(message.render());

        if let Err(e) = encoder.write(&record) {
            eprintln!(
                "[LOGGER ERROR] Writer '{}' failed: {}",
                encoder.writer().name(),
                e
            );
        }
    }

    /// Run every extractor, containing panics.
    ///
    /// A panicking extractor contributes a single `__panic__` field instead of
    /// its fields; the remaining extractors still run.
    fn extract_from_context(&mut self, ctx: &Context, extractors: &[ContextExtractor]) {
        for extractor in extractors {
            match panic::catch_unwind(AssertUnwindSafe(|| extractor(ctx))) {
                Ok(fields) => self.fields.extend(fields),
                Err(payload) => {
                    self.fields.insert(
                        PANIC_FIELD.to_string(),
                        FieldValue::String(format!(
                            "one of the context extractors panicked: {}",
                            panic_message(payload.as_ref())
                        )),
                    );
                }
            }
        }
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("fields", &self.fields)
            .field("error", &self.error)
            .field("chained", &self.chained)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
