//! # Rust Logger Facade
//!
//! A structured logging facade: a fluent builder produces an immutable
//! [`Logger`], and every logging call assembles exactly one JSON record from
//! static fields, per-call fields, an optional error, context-derived fields,
//! the timestamp and the caller location.
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::info;
//!
//! let buf = BufferWriter::new();
//! let logger = Logger::builder()
//!     .set_writer(buf.clone())
//!     .exclude_time()
//!     .build();
//!
//! info!(logger, None, "hello {}", "world");
//! assert_eq!(buf.contents(), "{\"level\":\"info\",\"message\":\"hello world\"}\n");
//! ```
//!
//! ## Features
//!
//! - **Two call shapes**: `logger.info(..)` or
//!   `logger.with_field(..).with_error(..).info(..)`, one record either way
//! - **Context extractors**: derive fields from a request [`Context`], with
//!   panics contained in a `__panic__` field
//! - **Pluggable writers**: stderr, any `io::Write`, in-memory buffers and a
//!   human-readable console renderer

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        extractor, Context, ContextExtractor, Entry, FieldValue, Fields, LogLevel, Logger,
        LoggerBuilder, LoggerConfiguration, LoggerError, LoggerSettings, Result, TimestampFormat,
    };
    pub use crate::writers::{BufferWriter, ConsoleWriter, IoWriter, LogWriter, StderrWriter};
}

pub use core::{
    extractor, Caller, ConfigAction, Context, ContextExtractor, Encoder, Entry, FieldValue,
    Fields, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfiguration, LoggerError,
    LoggerSettings, Message, Result, TimestampFormat, BASE_CALLER_SKIP_FRAMES,
};
pub use writers::{BufferWriter, ConsoleWriter, IoWriter, LogWriter, SharedWriter, StderrWriter};
