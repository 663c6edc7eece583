//! Integration tests for rulecheck.

mod composition;
mod messages;
mod objects;
mod scenarios;
mod strict_mode;

use rulecheck::value::{Map, Value};

/// Unwraps a `json!` object literal.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}
