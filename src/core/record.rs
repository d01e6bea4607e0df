//! The assembled record handed to the encoder

use super::caller::Caller;
use super::field::{FieldValue, Fields};
use super::log_level::LogLevel;

pub const LEVEL_FIELD: &str = "level";
pub const MESSAGE_FIELD: &str = "message";
pub const TIMESTAMP_FIELD: &str = "time";
pub const CALLER_FIELD: &str = "caller";
pub const ERROR_FIELD: &str = "error";
/// Carries the description of a panicking context extractor
pub const PANIC_FIELD: &str = "__panic__";

/// One structured log line.
///
/// Optional parts are absent rather than null: a record without an error
/// never carries an `error` field.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: Option<String>,
    pub caller: Option<Caller>,
    pub error: Option<String>,
    pub fields: Fields,
}

impl LogRecord {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            message: String::new(),
            timestamp: None,
            caller: None,
            error: None,
            fields: Fields::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Merge `fields` over the current ones; incoming values win
    #[must_use]
    pub fn with_fields(mut self, fields: &Fields) -> Self {
        for (name, value) in fields {
            self.fields.insert(name.clone(), value.clone());
        }
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: String) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    #[must_use]
    pub fn with_error(mut self, description: String) -> Self {
        self.error = Some(description);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: String) -> Self {
        self.message = message;
        self
    }

    /// Render as a JSON object.
    ///
    /// Fixed fields (`level`, `message`, `time`, `caller`, `error`) take
    /// precedence over user fields of the same name.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut json_obj = serde_json::Map::new();

        for (key, value) in &self.fields {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        json_obj.insert(
            LEVEL_FIELD.to_string(),
            serde_json::Value::String(self.level.to_str().to_string()),
        );
        if let Some(ref timestamp) = self.timestamp {
            json_obj.insert(
                TIMESTAMP_FIELD.to_string(),
                serde_json::Value::String(timestamp.clone()),
            );
        }
        if let Some(ref caller) = self.caller {
            json_obj.insert(
                CALLER_FIELD.to_string(),
                serde_json::Value::String(caller.to_string()),
            );
        }
        if let Some(ref error) = self.error {
            json_obj.insert(
                ERROR_FIELD.to_string(),
                serde_json::Value::String(error.clone()),
            );
        }
        json_obj.insert(
            MESSAGE_FIELD.to_string(),
            serde_json::Value::String(self.message.clone()),
        );

        serde_json::Value::Object(json_obj)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_json_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record() {
        let record = LogRecord::new(LogLevel::Info).with_message("hello".into());
        let json = record.to_json_value();

        assert_eq!(json, serde_json::json!({"level": "info", "message": "hello"}));
    }

    #[test]
    fn test_optional_parts_absent_when_unset() {
        let json = LogRecord::new(LogLevel::Warn).to_json_value();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key(ERROR_FIELD));
        assert!(!obj.contains_key(TIMESTAMP_FIELD));
        assert!(!obj.contains_key(CALLER_FIELD));
    }

    #[test]
    fn test_full_record() {
        let caller = Caller {
            file: "src/main.rs".into(),
            line: 42,
            depth: 3,
        };
        let record = LogRecord::new(LogLevel::Error)
            .with_message("boom".into())
            .with_timestamp("2025-01-08T10:30:45Z".into())
            .with_caller(caller)
            .with_error("disk full".into())
            .with_field("attempt", 2);

        let json = record.to_json_value();
        assert_eq!(json["caller"], "src/main.rs:42");
        assert_eq!(json["error"], "disk full");
        assert_eq!(json["time"], "2025-01-08T10:30:45Z");
        assert_eq!(json["attempt"], 2);
    }

    #[test]
    fn test_fixed_fields_win_over_user_fields() {
        let record = LogRecord::new(LogLevel::Debug)
            .with_message("real".into())
            .with_field("message", "spoofed")
            .with_field("level", "error");

        let json = record.to_json_value();
        assert_eq!(json["message"], "real");
        assert_eq!(json["level"], "debug");
    }

    #[test]
    fn test_with_fields_later_wins() {
        let mut overrides = Fields::new();
        overrides.insert("a".into(), 2.into());

        let record = LogRecord::new(LogLevel::Info)
            .with_field("a", 1)
            .with_fields(&overrides);
        assert_eq!(record.fields["a"], FieldValue::Int(2));
    }
}
