//! Human-readable console rendering
//!
//! Decorates another writer: each JSON record is decoded and re-rendered as
//!
//! ```text
//! 2025-01-08T10:30:45Z INF src/main.rs:12 > request served status=200 error="timeout"
//! ```
//!
//! Input that is not a JSON object is passed through unchanged.

use super::{LogWriter, SharedWriter};
use crate::core::record::{
    CALLER_FIELD, ERROR_FIELD, LEVEL_FIELD, MESSAGE_FIELD, TIMESTAMP_FIELD,
};
use crate::core::{LogLevel, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use serde_json::{Map, Value};

pub struct ConsoleWriter {
    inner: SharedWriter,
    use_colors: bool,
}

impl ConsoleWriter {
    /// Render onto `inner`
    pub fn new(inner: SharedWriter) -> Self {
        Self {
            inner,
            use_colors: cfg!(feature = "console"),
        }
    }

    /// Render onto standard error
    pub fn stderr() -> Self {
        Self::new(super::stderr())
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors && cfg!(feature = "console");
        self
    }

    pub fn inner(&self) -> &SharedWriter {
        &self.inner
    }

    fn render(&self, mut obj: Map<String, Value>) -> String {
        let mut parts = Vec::new();

        if let Some(time) = obj.remove(TIMESTAMP_FIELD) {
            parts.push(plain(&time));
        }

        let level = obj
            .remove(LEVEL_FIELD)
            .map(|v| LogLevel::parse(&plain(&v)))
            .unwrap_or_default();
        parts.push(self.level_label(level));

        if let Some(caller) = obj.remove(CALLER_FIELD) {
            parts.push(format!("{} >", plain(&caller)));
        }

        if let Some(message) = obj.remove(MESSAGE_FIELD) {
            let message = plain(&message);
            if !message.is_empty() {
                parts.push(message);
            }
        }

        let error = obj.remove(ERROR_FIELD);

        let mut keys: Vec<&String> = obj.keys().collect();
        keys.sort();
        for key in keys {
            parts.push(format!("{}={}", key, quoted(&obj[key])));
        }

        if let Some(error) = error {
            parts.push(self.error_label(&quoted(&error)));
        }

        parts.join(" ")
    }

    fn level_label(&self, level: LogLevel) -> String {
        let label = match level {
            LogLevel::Trace => "TRC",
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warn => "WRN",
            LogLevel::Error => "ERR",
            LogLevel::Disabled => "???",
        };
        #[cfg(feature = "console")]
        if self.use_colors {
            return label.color(level.color_code()).to_string();
        }
        label.to_string()
    }

    fn error_label(&self, value: &str) -> String {
        let text = format!("{}={}", ERROR_FIELD, value);
        #[cfg(feature = "console")]
        if self.use_colors {
            return text.red().to_string();
        }
        text
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&self, record: &[u8]) -> Result<()> {
        let mut out = String::new();
        for line in record.split(|b| *b == b'\n').filter(|l| !l.is_empty()) {
            match serde_json::from_slice::<Value>(line) {
                Ok(Value::Object(obj)) => out.push_str(&self.render(obj)),
                _ => out.push_str(&String::from_utf8_lossy(line)),
            }
            out.push('\n');
        }
        self.inner.write(out.as_bytes())
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }

    fn name(&self) -> &str {
        "console"
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn quoted(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() || s.contains([' ', '"', '=']) => {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }
        other => plain(other),
    }
}
