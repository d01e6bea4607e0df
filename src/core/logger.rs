//! Root logger

use super::builder::LoggerBuilder;
use super::config::LoggerConfiguration;
use super::context::Context;
use super::entry::Entry;
use super::error::Result;
use super::field::FieldValue;
use super::log_level::LogLevel;
use super::message::Message;
use std::fmt;

/// Long-lived logger built by [`LoggerBuilder`].
///
/// Holds only its immutable configuration. Every call allocates a private
/// [`Entry`], so one `Logger` can be shared across threads (e.g. in an `Arc`)
/// without locking; writers serialize their own output.
///
/// Each level method takes an optional [`Context`] and a message. Plain text
/// is logged verbatim; use the crate's macros (or `format_args!`) to
/// interpolate arguments.
pub struct Logger {
    config: LoggerConfiguration,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_logger_facade::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .set_level(LogLevel::Debug)
    ///     .include_caller()
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_configuration(config: LoggerConfiguration) -> Self {
        Self { config }
    }

    /// Highly detailed tracing messages, written by developers for developers
    #[track_caller]
    pub fn trace<'m>(&self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        Entry::direct(self).trace(ctx, message);
    }

    /// Detailed messages used mostly to debug the flow
    #[track_caller]
    pub fn debug<'m>(&self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        Entry::direct(self).debug(ctx, message);
    }

    /// Informational messages for users unfamiliar with the application
    #[track_caller]
    pub fn info<'m>(&self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        Entry::direct(self).info(ctx, message);
    }

    /// Potentially harmful situations
    #[track_caller]
    pub fn warn<'m>(&self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        Entry::direct(self).warn(ctx, message);
    }

    /// Severe events that might make the application misbehave.
    ///
    /// Not meant for every `Err`; attach those with
    /// `with_error(err).<level>(...)` instead.
    #[track_caller]
    pub fn error<'m>(&self, ctx: Option<&Context>, message: impl Into<Message<'m>>) {
        Entry::direct(self).error(ctx, message);
    }

    /// Log at a level chosen at runtime.
    ///
    /// `extra_skip_frames` is the number of stack frames above this call to
    /// report as the caller, for wrappers that are not `#[track_caller]`.
    /// A `#[track_caller]` wrapper already forwards its caller's location
    /// and passes 0.
    #[track_caller]
    pub fn custom<'m>(
        &self,
        ctx: Option<&Context>,
        level: LogLevel,
        extra_skip_frames: usize,
        message: impl Into<Message<'m>>,
    ) {
        Entry::direct(self).custom(ctx, level, extra_skip_frames, message);
    }

    /// Start an entry carrying `err`
    pub fn with_error<E: fmt::Display>(&self, err: E) -> Entry<'_> {
        Entry::chained(self).with_error(err)
    }

    /// Start an entry carrying one field
    pub fn with_field(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Entry<'_> {
        Entry::chained(self).with_field(name, value)
    }

    /// Start an entry carrying several fields
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry<'_>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Entry::chained(self).with_fields(fields)
    }

    /// Whether a record at `level` would be written
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.config.implementation().enabled(level)
    }

    pub fn configuration(&self) -> &LoggerConfiguration {
        &self.config
    }

    pub fn flush(&self) -> Result<()> {
        self.config.implementation().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("config", &self.config).finish()
    }
}
