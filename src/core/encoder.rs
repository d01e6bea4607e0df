//! JSON encoder: the level gate plus one-line serialization onto a writer

use super::error::Result;
use super::log_level::LogLevel;
use super::record::LogRecord;
use crate::writers::SharedWriter;
use std::fmt;

/// Encodes records as JSON lines and writes them to a [`SharedWriter`].
///
/// This is the engine a [`Logger`](super::Logger) drives; it is exposed through
/// `Logger::configuration().implementation()` for callers that want to write
/// pre-assembled records directly.
#[derive(Clone)]
pub struct Encoder {
    writer: SharedWriter,
    min_level: LogLevel,
}

impl Encoder {
    pub fn new(writer: SharedWriter, min_level: LogLevel) -> Self {
        Self { writer, min_level }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.min_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn writer(&self) -> &SharedWriter {
        &self.writer
    }

    /// Serialize `record` and hand it to the writer in a single call.
    ///
    /// Returns `Ok(false)` when the record is below the minimum level and
    /// nothing was written.
    pub fn write(&self, record: &LogRecord) -> Result<bool> {
        if !self.enabled(record.level) {
            return Ok(false);
        }

        let mut line = record.to_json()?.into_bytes();
        line.push(b'\n');
        self.writer.write(&line)?;
        Ok(true)
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("writer", &self.writer.name())
            .field("min_level", &self.min_level)
            .finish()
    }
}
