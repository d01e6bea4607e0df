//! Structured field values

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Named values attached to a record.
///
/// Iteration order is irrelevant; on key collision the later insert wins.
pub type Fields = HashMap<String, FieldValue>;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Bare rendering used by text outputs: strings unquoted, `null` for `Null`
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Int(i) => fmt::Display::fmt(i, f),
            FieldValue::Uint(u) => fmt::Display::fmt(u, f),
            FieldValue::Float(x) => fmt::Display::fmt(x, f),
            FieldValue::Bool(b) => fmt::Display::fmt(b, f),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl FieldValue {
    /// JSON form; non-finite floats become `null`
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            FieldValue::String(s) => Value::from(s.as_str()),
            FieldValue::Int(i) => Value::from(*i),
            FieldValue::Uint(u) => Value::from(*u),
            FieldValue::Float(f) => Value::from(*f),
            FieldValue::Bool(b) => Value::from(*b),
            FieldValue::Null => Value::Null,
        }
    }
}

macro_rules! field_value_from {
    ($variant:ident: $($ty:ty),+ => $target:ty) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

field_value_from!(Int: i8, i16, i32, i64 => i64);
field_value_from!(Uint: u8, u16, u32, u64 => u64);
field_value_from!(Float: f32, f64 => f64);
field_value_from!(Bool: bool => bool);
field_value_from!(String: String, &str, &String, char => String);

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        FieldValue::Uint(value as u64)
    }
}

impl From<isize> for FieldValue {
    fn from(value: isize) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(FieldValue::from("a"), FieldValue::String("a".into()));
        assert_eq!(FieldValue::from(1), FieldValue::Int(1));
        assert_eq!(FieldValue::from(7u32), FieldValue::Uint(7));
        assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        assert_eq!(FieldValue::from(None::<i32>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::String("x".into()));
        assert_eq!(FieldValue::from('c'), FieldValue::String("c".into()));
        assert_eq!(FieldValue::from(-2i8), FieldValue::Int(-2));
    }

    #[test]
    fn test_display_is_bare() {
        assert_eq!(FieldValue::from("two words").to_string(), "two words");
        assert_eq!(FieldValue::Null.to_string(), "null");
        assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_to_json_value() {
        assert_eq!(FieldValue::Int(-3).to_json_value(), serde_json::json!(-3));
        assert_eq!(FieldValue::Uint(u64::MAX).to_json_value(), serde_json::json!(u64::MAX));
        assert_eq!(FieldValue::Float(f64::NAN).to_json_value(), serde_json::Value::Null);
        assert_eq!(FieldValue::from("v").to_json_value(), serde_json::json!("v"));
    }

    #[test]
    fn test_untagged_deserialize() {
        let fields: Fields =
            serde_json::from_str(r#"{"service":"api","port":8080,"ratio":0.5,"on":true}"#).unwrap();
        assert_eq!(fields["service"], FieldValue::from("api"));
        assert_eq!(fields["port"], FieldValue::Int(8080));
        assert_eq!(fields["ratio"], FieldValue::Float(0.5));
        assert_eq!(fields["on"], FieldValue::Bool(true));
    }
}
