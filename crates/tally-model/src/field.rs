//! Loosely typed field values from request documents.
//!
//! Request fields are not validated. Whatever JSON a caller sends for an
//! id, a name or a value is kept as a [`FieldValue`], rendered as text the
//! way the reference output does, and coerced to a number only where a
//! comparison needs one.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::number::{ABSENT_VALUE, Number};

/// Text an object renders as.
const OBJECT_TEXT: &str = "[object Object]";

/// A field as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// The field was not present at all.
    #[default]
    Absent,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// An array or object, kept as its rendered text.
    Composite(String),
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Text rendering: `undefined`, `null`, `true`, numbers in report
    /// notation, strings verbatim.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Absent => Cow::Borrowed(ABSENT_VALUE),
            FieldValue::Null => Cow::Borrowed("null"),
            FieldValue::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
            FieldValue::Number(value) => Cow::Owned(Number(*value).to_string()),
            FieldValue::Text(text) | FieldValue::Composite(text) => Cow::Borrowed(text),
        }
    }

    /// Numeric view used by comparisons.
    ///
    /// `null` and the empty string are 0, booleans are 0 or 1, numeric
    /// strings parse, everything else is NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Absent => f64::NAN,
            FieldValue::Null => 0.0,
            FieldValue::Bool(flag) => f64::from(u8::from(*flag)),
            FieldValue::Number(value) => *value,
            FieldValue::Text(text) | FieldValue::Composite(text) => parse_numeric_text(text),
        }
    }

    /// Contribution to a running total.
    ///
    /// Only numbers, `null` and booleans add arithmetically. Any other
    /// value poisons the total with NaN.
    pub fn contribution(&self) -> f64 {
        match self {
            FieldValue::Null | FieldValue::Bool(_) | FieldValue::Number(_) => self.as_number(),
            FieldValue::Absent | FieldValue::Text(_) | FieldValue::Composite(_) => f64::NAN,
        }
    }

    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(flag) => FieldValue::Bool(flag),
            Value::Number(number) => number
                .as_f64()
                .map_or_else(|| FieldValue::Text(number.to_string()), FieldValue::Number),
            Value::String(text) => FieldValue::Text(text),
            Value::Array(_) | Value::Object(_) => FieldValue::Composite(composite_text(&value)),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            FieldValue::Absent | FieldValue::Null => Value::Null,
            FieldValue::Bool(flag) => Value::Bool(*flag),
            FieldValue::Number(value) => serde_json::Number::from_f64(*value)
                .map_or(Value::Null, Value::Number),
            FieldValue::Text(text) | FieldValue::Composite(text) => Value::String(text.clone()),
        }
    }
}

fn composite_text(value: &Value) -> String {
    match value {
        Value::Array(elements) => elements
            .iter()
            .map(|element| match element {
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => composite_text(element),
                other => FieldValue::from_json(other.clone()).text().into_owned(),
            })
            .collect::<Vec<_>>()
            .join(","),
        _ => OBJECT_TEXT.to_string(),
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if plain {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FieldValue::from_json)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}
