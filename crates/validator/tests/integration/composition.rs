//! `with` composition over nested structures.

use crate::object;
use pretty_assertions::assert_eq;
use rulecheck::{FieldRuleMap, RuleSet, Validator};
use serde_json::json;

fn bar_rules(min: i64) -> FieldRuleMap {
    FieldRuleMap::new().field(
        "bar",
        RuleSet::new().with_fields(FieldRuleMap::new().field("x", RuleSet::new().rule("min_value", min))),
    )
}

#[test]
fn nested_failure_is_reported_under_its_path() {
    let problems = Validator::new()
        .check_mapping(&object(json!({"bar": {"x": 100}})), &bar_rules(101))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&problems).unwrap(),
        json!({"bar": {"x": {"min_value": ""}}})
    );
}

#[test]
fn passing_nested_field_is_absent() {
    let problems = Validator::new()
        .check_mapping(&object(json!({"bar": {"x": 100}, "other": 1})), &bar_rules(100))
        .unwrap();
    assert!(problems.is_empty());
    assert_eq!(serde_json::to_value(&problems).unwrap(), json!({}));
}

#[test]
fn deep_nesting_from_json() {
    let fields: FieldRuleMap = serde_json::from_value(json!({
        "order": {"with": {
            "customer": {"with": {
                "email": {"format": "email"},
                "name": {"required": true}
            }},
            "lines": {"count_range": [1, 5]}
        }}
    }))
    .unwrap();

    let mut validator = Validator::new();
    validator.set_message("format", "{label} is not a valid {format}");

    let problems = validator
        .check_object(
            &json!({"order": {"customer": {"email": "nope", "name": "Ann"}, "lines": []}}),
            &fields,
        )
        .unwrap();

    assert_eq!(
        serde_json::to_value(&problems).unwrap(),
        json!({"order": {
            "customer": {"email": {"format": "email is not a valid email"}},
            "lines": {"count_range": ""}
        }})
    );
}

#[test]
fn list_elements_are_addressed_by_position() {
    let fields: FieldRuleMap = serde_json::from_value(json!({
        "tags": {"with": {"0": {"in": ["red", "green"]}, "2": {"required": true}}}
    }))
    .unwrap();
    let problems = Validator::new()
        .check_object(&json!({"tags": ["blue", "red"]}), &fields)
        .unwrap();
    assert_eq!(problems.lookup(&["tags", "0", "in"]), Some(""));
    assert_eq!(problems.lookup(&["tags", "2", "required"]), Some(""));
}

#[test]
fn with_ignores_sibling_rules() {
    let rules = RuleSet::new()
        .rule("required", true)
        .with_fields(FieldRuleMap::new().field("x", RuleSet::new().rule("min_value", 1)));
    let fields = FieldRuleMap::new().field("bar", rules);
    let problems = Validator::new()
        .check_mapping(&object(json!({"bar": {"x": 5}})), &fields)
        .unwrap();
    assert!(problems.is_empty());
}
