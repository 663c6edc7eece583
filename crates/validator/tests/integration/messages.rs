//! Message catalogs, locales and labels.

use pretty_assertions::assert_eq;
use rulecheck::message::Messages;
use rulecheck::{FieldRuleMap, FormatSpec, Label, RuleSet, Validator};
use serde_json::json;

fn catalog() -> Messages {
    serde_json::from_value(json!({
        "en": {
            "required": "{label} is required.",
            "format": "{label} must be a {format} date."
        },
        "pt": {
            "required": "{label} é obrigatório.",
            "format": "{label} deve ser uma data {format}."
        }
    }))
    .unwrap()
}

fn birthday() -> FieldRuleMap {
    FieldRuleMap::new().field(
        "birthday",
        RuleSet::new()
            .rule("required", true)
            .rule("format", FormatSpec::localized([("en", "date_mdy"), ("pt", "date_dmy")]))
            .with_label(Label::localized([("en", "Birthday"), ("pt", "Aniversário")])),
    )
}

#[test]
fn messages_follow_the_default_locale() {
    let mut validator = Validator::new();
    validator.set_messages(catalog());

    let problems = validator
        .check_object(&json!({"birthday": "31/12/1990"}), &birthday())
        .unwrap();
    assert_eq!(
        problems.lookup(&["birthday", "format"]),
        Some("Birthday must be a date_mdy date.")
    );

    validator.set_locale("pt");
    let problems = validator
        .check_object(&json!({"birthday": "12/31/1990"}), &birthday())
        .unwrap();
    assert_eq!(
        problems.lookup(&["birthday", "format"]),
        Some("Aniversário deve ser uma data date_dmy.")
    );
    assert!(
        validator
            .check_object(&json!({"birthday": "31/12/1990"}), &birthday())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn locale_without_templates_renders_empty_messages() {
    let mut validator = Validator::with_locale("fr");
    validator.set_messages(catalog());
    let fields = FieldRuleMap::new().field("name", RuleSet::new().rule("required", true));
    let problems = validator.check_object(&json!({}), &fields).unwrap();
    assert_eq!(problems.lookup(&["name", "required"]), Some(""));
}

#[test]
fn template_sees_every_rule_argument_and_the_value() {
    let mut validator = Validator::new();
    validator.set_message("in", "{value} is not one of {in} (max {max_length})");
    let rules = RuleSet::new().rule("max_length", 8).rule("in", ["S", "M", "L"]);
    let problems = validator.check(&json!("XL"), &rules, None).unwrap();
    assert_eq!(problems.message("in"), Some("XL is not one of S, M, L (max 8)"));
}

#[test]
fn substituted_text_is_not_rescanned() {
    let mut validator = Validator::new();
    validator.set_message("min_length", "{value} is shorter than {min_length}");
    let problems = validator
        .check(&json!("{min_length}"), &RuleSet::new().rule("min_length", 20), None)
        .unwrap();
    assert_eq!(problems.message("min_length"), Some("{min_length} is shorter than 20"));
}

#[test]
fn unknown_placeholders_survive() {
    let mut validator = Validator::new();
    validator.set_message("required", "{label} is {missing}");
    let problems = validator
        .check(&json!(""), &RuleSet::new().rule("required", true), Some("Name"))
        .unwrap();
    assert_eq!(problems.message("required"), Some("Name is {missing}"));
}

#[test]
fn removing_templates() {
    let mut validator = Validator::new();
    validator.set_messages(catalog()).remove_message("required");
    assert_eq!(validator.rule_message("required", None), "");
    assert_eq!(validator.rule_message("required", Some("pt")), "{label} é obrigatório.");

    validator.remove_locale_message("pt", "required");
    assert_eq!(validator.rule_message("required", Some("pt")), "");
    assert_eq!(validator.messages().len(), 2);
}
