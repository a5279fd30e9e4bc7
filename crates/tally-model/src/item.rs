use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};

use crate::field::FieldValue;

/// One row of a report.
///
/// `priority` is owned by the caller but written by the renderer: an admin
/// viewer marks every visible item above the priority threshold. Renderers
/// take `&mut [LineItem]` so the write is visible at the call site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "FieldValue::is_absent")]
    pub id: FieldValue,
    #[serde(default, skip_serializing_if = "FieldValue::is_absent")]
    pub name: FieldValue,
    #[serde(default, skip_serializing_if = "FieldValue::is_absent")]
    pub value: FieldValue,
    /// Any truthy JSON value counts as set.
    #[serde(default, deserialize_with = "truthy")]
    pub priority: bool,
}

impl LineItem {
    pub fn new(id: impl Into<FieldValue>, name: impl Into<FieldValue>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: FieldValue::Number(value),
            priority: false,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn id_text(&self) -> Cow<'_, str> {
        self.id.text()
    }

    pub fn name_text(&self) -> Cow<'_, str> {
        self.name.text()
    }

    pub fn value_text(&self) -> Cow<'_, str> {
        self.value.text()
    }

    /// Value as compared against visibility and priority thresholds.
    pub fn numeric_value(&self) -> f64 {
        self.value.as_number()
    }

    /// Value as added to the report total.
    pub fn contribution(&self) -> f64 {
        self.value.contribution()
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FieldValue::deserialize(deserializer)? {
        FieldValue::Absent | FieldValue::Null => false,
        FieldValue::Bool(flag) => flag,
        FieldValue::Number(number) => number != 0.0 && !number.is_nan(),
        FieldValue::Text(text) => !text.is_empty(),
        FieldValue::Composite(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_render_placeholder() {
        let item: LineItem = serde_json::from_str(r#"{"priority": false}"#).unwrap();
        assert_eq!(item.id_text(), "undefined");
        assert_eq!(item.name_text(), "undefined");
        assert_eq!(item.value_text(), "undefined");
        assert!(item.numeric_value().is_nan());
        assert!(!item.priority);
    }

    #[test]
    fn raw_value_text_is_kept() {
        let text: LineItem = serde_json::from_str(r#"{"id": 1, "value": "n/d"}"#).unwrap();
        let null: LineItem = serde_json::from_str(r#"{"id": 2, "value": null}"#).unwrap();
        let numeric: LineItem = serde_json::from_str(r#"{"id": 3, "value": "100"}"#).unwrap();
        assert_eq!(text.value_text(), "n/d");
        assert!(text.contribution().is_nan());
        assert_eq!(null.value_text(), "null");
        assert_eq!(null.numeric_value(), 0.0);
        assert_eq!(numeric.value_text(), "100");
        assert_eq!(numeric.numeric_value(), 100.0);
    }

    #[test]
    fn priority_follows_truthiness() {
        let cases = [
            (r#"{"priority": true}"#, true),
            (r#"{"priority": 1}"#, true),
            (r#"{"priority": "yes"}"#, true),
            (r#"{"priority": {}}"#, true),
            (r#"{"priority": 0}"#, false),
            (r#"{"priority": ""}"#, false),
            (r#"{"priority": null}"#, false),
            (r#"{"priority": false}"#, false),
        ];
        for (json, expected) in cases {
            let item: LineItem = serde_json::from_str(json).unwrap();
            assert_eq!(item.priority, expected, "{json}");
        }
    }

    #[test]
    fn ids_of_any_shape_decode() {
        let cases = [
            (r#"{"id": 7}"#, "7"),
            (r#"{"id": "A-7"}"#, "A-7"),
            (r#"{"id": 7.5}"#, "7.5"),
            (r#"{"id": true}"#, "true"),
            (r#"{"id": {"k": 1}}"#, "[object Object]"),
            (r#"{"id": null}"#, "null"),
        ];
        for (json, expected) in cases {
            let item: LineItem = serde_json::from_str(json).unwrap();
            assert_eq!(item.id_text(), expected, "{json}");
        }
    }
}
