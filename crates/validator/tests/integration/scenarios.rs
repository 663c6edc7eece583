//! End-to-end checks of single values and flat mappings.

use crate::object;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rulecheck::{FieldRuleMap, RuleArgument, RuleSet, Validator};
use serde_json::{Value, json};

#[test]
fn failed_rule_without_template_has_empty_message() {
    let validator = Validator::new();
    let problems = validator
        .check(&json!("hi"), &RuleSet::new().rule("format", "numeric"), None)
        .unwrap();
    assert_eq!(serde_json::to_value(&problems).unwrap(), json!({"format": ""}));
}

#[test]
fn failed_rule_renders_label() {
    let mut validator = Validator::new();
    validator.set_message("format", "{label} must be numeric!");
    let problems = validator
        .check(&json!("hi"), &RuleSet::new().rule("format", "numeric"), Some("Age"))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&problems).unwrap(),
        json!({"format": "Age must be numeric!"})
    );
}

#[test]
fn range_template_uses_derived_bounds() {
    let mut validator = Validator::new();
    validator.set_message(
        "length_range",
        "{label} must have from {min_length} to {max_length} characters.",
    );
    let fields = FieldRuleMap::new().field("name", RuleSet::new().rule("length_range", [5, 60]));
    let problems = validator
        .check_mapping(&object(json!({"name": "Bob"})), &fields)
        .unwrap();
    assert_eq!(
        serde_json::to_value(&problems).unwrap(),
        json!({"name": {"length_range": "name must have from 5 to 60 characters."}})
    );
}

#[test]
fn numeric_minimum_without_template() {
    let validator = Validator::new();
    let fields = FieldRuleMap::new().field("age", RuleSet::new().rule("min_value", 18));
    let problems = validator
        .check_mapping(&object(json!({"age": 16})), &fields)
        .unwrap();
    assert_eq!(serde_json::to_value(&problems).unwrap(), json!({"age": {"min_value": ""}}));
}

#[test]
fn passing_value_yields_empty_result() {
    let validator = Validator::new();
    let rules = RuleSet::new()
        .rule("required", true)
        .rule("length_range", (2, 10))
        .rule("regex", "^[a-z]+$");
    assert!(validator.check(&json!("hello"), &rules, None).unwrap().is_empty());
}

#[rstest]
#[case("required", json!(true), json!(""), false)]
#[case("required", json!(false), json!(""), true)]
#[case("min_length", json!(3), json!("ab"), false)]
#[case("max_length", json!(3), json!("abcd"), false)]
#[case("length_range", json!(3), json!("abc"), true)]
#[case("min_value", json!(10), json!("10"), true)]
#[case("max_value", json!(10), json!(10.5), false)]
#[case("value_range", json!([10, 1]), json!(5), true)]
#[case("min_count", json!(2), json!([1]), false)]
#[case("count_range", json!([1, 3]), json!([1, 2]), true)]
#[case("in", json!(["a", "b"]), json!("b"), true)]
#[case("in", json!([1, 2]), json!("2"), true)]
#[case("not_in", json!(["a", "b"]), json!("c"), true)]
#[case("start_with", json!(["http", "ftp"]), json!("ftp://x"), true)]
#[case("not_start_with", json!("_"), json!("_private"), false)]
#[case("end_with", json!(".rs"), json!("lib.rs"), true)]
#[case("not_end_with", json!([".exe", ".bat"]), json!("run.sh"), true)]
#[case("contains", json!("@"), json!("a@b"), true)]
#[case("not_contains", json!(" "), json!("a b"), false)]
#[case("regex", json!(r"^\d{3}$"), json!("123"), true)]
#[case("format", json!("email"), json!("bob@example.com"), true)]
#[case("format", json!("numeric"), json!(" "), false)]
#[case("format", json!("integer"), json!("+1"), false)]
#[case("format", json!("integer"), json!("-1"), true)]
#[case("format", json!("datetime_dmy"), json!("31/12/2024 10:00"), true)]
#[case("format", json!("datetime_mdy"), json!("31/12/2024 10:00"), false)]
#[case("format", json!("longdatetime_ymd"), json!("2024/12/31 10:00:05"), true)]
#[case("format", json!({"name": "longdatetime_dmy", "separator": "-"}), json!("31-12-2024 10:00:05"), true)]
#[case("format", json!({"name": "date_ymd", "separator": "."}), json!("2024.02.29"), true)]
#[case("format", json!({"name": "date_ymd", "separator": "."}), json!("2023.02.29"), false)]
fn builtin_rules_from_json(
    #[case] rule: &str,
    #[case] argument: Value,
    #[case] value: Value,
    #[case] passes: bool,
) {
    let rules = RuleSet::try_from(json!({ rule: argument })).unwrap();
    let problems = Validator::new().check(&value, &rules, None).unwrap();
    assert_eq!(problems.is_empty(), passes, "{rule} on {value}");
}

#[test]
fn rules_keep_declaration_order() {
    let validator = Validator::new();
    let rules = RuleSet::new()
        .rule("min_length", 5)
        .rule("format", "numeric")
        .rule("contains", "z");
    let problems = validator.check(&json!("ab"), &rules, None).unwrap();
    let order: Vec<_> = problems.rules().unwrap().keys().cloned().collect();
    assert_eq!(order, ["min_length", "format", "contains"]);
}

#[test]
fn custom_rule_replaces_builtin() {
    let mut validator = Validator::new();
    validator.set_rule("required", |value: &Value, _: &RuleArgument| !value.is_null());
    let rules = RuleSet::new().rule("required", true);
    assert!(validator.check(&json!(""), &rules, None).unwrap().is_empty());
    assert_eq!(validator.check(&Value::Null, &rules, None).unwrap().len(), 1);
}

#[test]
fn custom_format() {
    let mut validator = Validator::new();
    validator.set_format("hex", |text: &str| text.chars().all(|c| c.is_ascii_hexdigit()));
    let rules = RuleSet::new().rule("format", "hex");
    assert!(validator.check(&json!("beef"), &rules, None).unwrap().is_empty());
    assert!(!validator.check(&json!("beefy"), &rules, None).unwrap().is_empty());
}
