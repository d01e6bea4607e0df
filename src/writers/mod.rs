//! Output targets for encoded records
//!
//! A writer receives one fully encoded record per call and must write it
//! without interleaving with concurrent calls.

pub mod buffer;
pub mod console;
pub mod stream;

pub use buffer::BufferWriter;
pub use console::ConsoleWriter;
pub use stream::{IoWriter, StderrWriter};

use crate::core::Result;
use std::sync::Arc;

pub trait LogWriter: Send + Sync {
    /// Write one encoded record, trailing newline included
    fn write(&self, record: &[u8]) -> Result<()>;
    fn flush(&self) -> Result<()> {
        Ok(())
    }
    fn name(&self) -> &str;
}

pub type SharedWriter = Arc<dyn LogWriter>;

/// The process's standard error stream
pub fn stderr() -> SharedWriter {
    Arc::new(StderrWriter)
}
