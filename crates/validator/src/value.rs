//! Helpers for reading checked values
//!
//! Checked values are plain [`serde_json::Value`]s. These helpers give every
//! rule the same view of them: what their text is, how long they are,
//! whether they are numbers.

use crate::rule::Scalar;
use std::borrow::Cow;

pub use serde_json::{Map, Number, Value};

/// Type name of a value for log and error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Text form of a scalar value.
///
/// `Null` reads as the empty string and booleans as `true`/`false`. Lists
/// and mappings have no text form.
pub fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => Some(Cow::Borrowed("")),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Bool(false) => Some(Cow::Borrowed("false")),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text used when a value is shown in a message.
///
/// Same as [`text_of`], with lists and mappings written as compact JSON.
pub fn display_text(value: &Value) -> Cow<'_, str> {
    text_of(value).unwrap_or_else(|| Cow::Owned(value.to_string()))
}

/// Length of a value: characters for scalars, entries for lists and
/// mappings.
pub fn length_of(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(entries) => entries.len(),
        other => text_of(other).map_or(0, |text| text.chars().count()),
    }
}

/// Numeric reading of a value.
///
/// Numbers, and strings holding a finite decimal number (surrounding
/// whitespace ignored), are numeric. Nothing else is.
pub fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    // `f64::from_str` also accepts `inf` and `NaN`
    if text.is_empty() || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Loose equality between a checked value and a rule candidate.
///
/// Numbers and numeric strings compare by numeric value, other strings
/// by text, booleans only with booleans.
pub fn loosely_equals(value: &Value, candidate: &Scalar) -> bool {
    match candidate {
        Scalar::Bool(b) => value.as_bool() == Some(*b),
        Scalar::Integer(i) => number_of(value) == Some(*i as f64),
        Scalar::Float(f) => number_of(value) == Some(*f),
        Scalar::String(s) => match (number_of(value), parse_number(s)) {
            (Some(a), Some(b)) => a == b,
            _ => !value.is_boolean() && text_of(value).is_some_and(|text| text == s.as_str()),
        },
    }
}

/// Reads a value as a field mapping.
///
/// Mappings are used as they are. Lists become position-keyed mappings
/// (`"0"`, `"1"`, ...), `Null` becomes the empty mapping and any other
/// scalar becomes `{"0": scalar}`.
pub fn as_field_mapping(value: &Value) -> Cow<'_, Map<String, Value>> {
    match value {
        Value::Object(entries) => Cow::Borrowed(entries),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item.clone()))
                .collect(),
        ),
        Value::Null => Cow::Owned(Map::new()),
        scalar => {
            let mut entries = Map::new();
            entries.insert("0".to_string(), scalar.clone());
            Cow::Owned(entries)
        }
    }
}
