//! Stream-backed writers

use super::LogWriter;
use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writes to the process's standard error stream
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrWriter;

impl LogWriter for StderrWriter {
    fn write(&self, record: &[u8]) -> Result<()> {
        // The stderr lock keeps one record in one piece.
        let mut handle = io::stderr().lock();
        handle
            .write_all(record)
            .map_err(|e| LoggerError::io("writing to", "stderr", e))
    }

    fn flush(&self) -> Result<()> {
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

/// Adapts any `io::Write` into a [`LogWriter`] by serializing access behind a mutex
pub struct IoWriter<W: Write + Send> {
    inner: Mutex<W>,
    name: String,
}

impl<W: Write + Send> IoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Mutex::new(inner),
            name: "io".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl IoWriter<File> {
    /// Open `path` for appending, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io("opening", path.display().to_string(), e)
            })?;
        Ok(Self::new(file).with_name("file"))
    }
}

impl<W: Write + Send> LogWriter for IoWriter<W> {
    fn write(&self, record: &[u8]) -> Result<()> {
        self.inner
            .lock()
            .write_all(record)
            .map_err(|e| LoggerError::io("writing to", self.name.as_str(), e))
    }

    fn flush(&self) -> Result<()> {
        self.inner
            .lock()
            .flush()
            .map_err(|e| LoggerError::io("flushing", self.name.as_str(), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_io_writer_wraps_vec() {
        let writer = IoWriter::new(Vec::new());
        writer.write(b"one\n").unwrap();
        writer.write(b"two\n").unwrap();

        assert_eq!(writer.name(), "io");
        assert_eq!(writer.into_inner(), b"one\ntwo\n".to_vec());
    }

    #[test]
    fn test_file_writer_appends() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.jsonl");

        let writer = IoWriter::file(&path)?;
        writer.write(b"{\"message\":\"first\"}\n")?;
        writer.flush()?;
        drop(writer);

        let writer = IoWriter::file(&path)?;
        writer.write(b"{\"message\":\"second\"}\n")?;
        writer.flush()?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.lines().count(), 2);
        assert_eq!(writer.name(), "file");
        Ok(())
    }

    #[test]
    fn test_file_writer_bad_path() {
        let err = IoWriter::file("/nonexistent-dir/for/sure/app.log").err().unwrap();
        assert!(matches!(err, LoggerError::Io { .. }));
    }

    #[test]
    fn test_stderr_name() {
        assert_eq!(StderrWriter.name(), "stderr");
    }
}
