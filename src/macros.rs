//! Logging macros for ergonomic message formatting.
//!
//! Each macro takes the logger (or an [`Entry`](crate::Entry) chain), the
//! optional context, and a message. A message on its own is passed through
//! verbatim; a format string followed by arguments is interpolated with
//! `format_args!`, so mismatched arguments are compile errors.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::{info, warn};
//!
//! let buf = BufferWriter::new();
//! let logger = Logger::builder().set_writer(buf.clone()).exclude_time().build();
//!
//! // Verbatim, braces included
//! info!(logger, None, "progress: 100% {done}");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, None, "listening on port {}", port);
//!
//! // On a field chain
//! warn!(logger.with_field("attempt", 3), None, "retrying in {}s", 5);
//!
//! assert_eq!(buf.lines().len(), 3);
//! ```

/// Log at a runtime level.
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = Logger::builder().set_writer(BufferWriter::new()).build();
/// use rust_logger_facade::log;
/// log!(logger, None, LogLevel::Info, "simple message");
/// log!(logger, None, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $ctx:expr, $level:expr, $msg:expr $(,)?) => {
        $logger.custom($ctx, $level, 0, $msg)
    };
    ($logger:expr, $ctx:expr, $level:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.custom($ctx, $level, 0, ::std::format_args!($fmt, $($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $ctx:expr, $msg:expr $(,)?) => {
        $logger.trace($ctx, $msg)
    };
    ($logger:expr, $ctx:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.trace($ctx, ::std::format_args!($fmt, $($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $msg:expr $(,)?) => {
        $logger.debug($ctx, $msg)
    };
    ($logger:expr, $ctx:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.debug($ctx, ::std::format_args!($fmt, $($arg)+))
    };
}

/// Log an info-level message.
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = Logger::builder().set_writer(BufferWriter::new()).build();
/// use rust_logger_facade::info;
/// info!(logger, None, "application started");
/// info!(logger, None, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $msg:expr $(,)?) => {
        $logger.info($ctx, $msg)
    };
    ($logger:expr, $ctx:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.info($ctx, ::std::format_args!($fmt, $($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $ctx:expr, $msg:expr $(,)?) => {
        $logger.warn($ctx, $msg)
    };
    ($logger:expr, $ctx:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.warn($ctx, ::std::format_args!($fmt, $($arg)+))
    };
}

/// Log an error-level message.
///
/// ```
/// # use rust_logger_facade::prelude::*;
/// # let logger = Logger::builder().set_writer(BufferWriter::new()).build();
/// use rust_logger_facade::error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// error!(logger.with_error(&err), None, "failed to load {}", "config");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $msg:expr $(,)?) => {
        $logger.error($ctx, $msg)
    };
    ($logger:expr, $ctx:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.error($ctx, ::std::format_args!($fmt, $($arg)+))
    };
}
