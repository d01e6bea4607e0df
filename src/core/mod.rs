//! Core logger types

pub mod builder;
pub mod caller;
pub mod config;
pub mod context;
pub mod encoder;
pub mod entry;
pub mod error;
pub mod field;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod record;
pub mod timestamp;

pub use builder::{ConfigAction, LoggerBuilder};
pub use config::{LoggerConfiguration, LoggerSettings, BASE_CALLER_SKIP_FRAMES};
pub use context::{extractor, Context, ContextExtractor};
pub use encoder::Encoder;
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use field::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use message::Message;
pub use caller::Caller;
pub use record::LogRecord;
pub use timestamp::TimestampFormat;
