//! In-memory writer

use super::LogWriter;
use crate::core::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared in-memory buffer.
///
/// Clones share the same storage, so one clone can be handed to the builder
/// while another inspects what was written.
///
/// ```
/// use rust_logger_facade::{BufferWriter, Logger};
///
/// let buf = BufferWriter::new();
/// let logger = Logger::builder().set_writer(buf.clone()).exclude_time().build();
/// logger.info(None, "ready");
/// assert!(buf.contents().contains("\"message\":\"ready\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl LogWriter for BufferWriter {
    fn write(&self, record: &[u8]) -> Result<()> {
        self.buf.lock().extend_from_slice(record);
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}
