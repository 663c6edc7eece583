//! Configuration errors and the unknown-rule policy.

use rstest::rstest;
use rulecheck::{
    CheckError, FieldRuleMap, RuleSet, UnknownRulePolicy, Validator, ValidatorConfig,
};
use serde_json::{Value, json};

fn strict() -> Validator {
    Validator::from_config(ValidatorConfig::default().with_unknown_rules(UnknownRulePolicy::Reject))
}

#[test]
fn typo_is_ignored_by_default() {
    let rules = RuleSet::new().rule("requird", true);
    assert!(Validator::new().check(&json!(""), &rules, None).unwrap().is_empty());
}

#[test]
fn typo_is_an_error_in_strict_mode() {
    let fields = FieldRuleMap::new().field("name", RuleSet::new().rule("requird", true));
    let err = strict().check_object(&json!({"name": ""}), &fields).unwrap_err();
    assert_eq!(err.code(), "unknown_rule");
    assert!(err.to_string().contains("requird"));
}

#[test]
fn removed_rule_is_unknown_in_strict_mode() {
    let mut validator = strict();
    validator.remove_rule("regex");
    let err = validator
        .check(&json!("x"), &RuleSet::new().rule("regex", "x"), None)
        .unwrap_err();
    assert!(matches!(err, CheckError::UnknownRule { .. }));
}

#[rstest]
#[case(json!({"length_range": [1, 2, 3]}))]
#[case(json!({"length_range": ["a", "b"]}))]
#[case(json!({"value_range": "1-10"}))]
#[case(json!({"min_length": "3"}))]
#[case(json!({"regex": "(unclosed"}))]
#[case(json!({"in": {"name": "date"}}))]
fn bad_arguments_abort(#[case] rules: Value) {
    let result = RuleSet::try_from(rules).and_then(|rules| Validator::new().check(&json!("abc"), &rules, None));
    assert!(
        matches!(
            result,
            Err(CheckError::InvalidRuleArgument { .. } | CheckError::InvalidRuleSet { .. })
        ),
        "{result:?}"
    );
}

#[test]
fn unknown_format_and_missing_locale() {
    let validator = Validator::with_locale("de");

    let err = validator
        .check(&json!("1"), &RuleSet::new().rule("format", "roman"), None)
        .unwrap_err();
    assert!(matches!(err, CheckError::FormatResolution { ref format } if format == "roman"));

    let rules: RuleSet = serde_json::from_value(json!({"format": {"en": "date_mdy"}})).unwrap();
    let err = validator.check(&json!("1/2/2000"), &rules, None).unwrap_err();
    assert!(matches!(err, CheckError::FormatLocale { ref locale } if locale == "de"));
    assert!(err.is_format_error());
}

#[test]
fn malformed_rule_sets_are_rejected() {
    let err = RuleSet::try_from(json!({"with": [1, 2]})).unwrap_err();
    assert_eq!(err.code(), "invalid_rule_set");
    assert!(FieldRuleMap::try_from(json!({"name": 5})).is_err());
}
