//! Basic usage example for rulecheck
//!
//! Run with `cargo run --example basic_usage -p rulecheck`.

use rulecheck::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::Level;

#[derive(Serialize)]
struct Signup {
    user: String,
    email: String,
    age: u32,
    address: Address,
}

#[derive(Serialize)]
struct Address {
    city: String,
    zip: String,
}

fn main() -> Result<(), CheckError> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut validator = Validator::new();
    validator
        .set_message("required", "{label} is required.")
        .set_message("length_range", "{label} must have from {min_length} to {max_length} characters.")
        .set_message("min_value", "{label} must be at least {min_value}.")
        .set_message("format", "{label} must be a valid {format}.")
        .set_locale_message("pt", "required", "{label} é obrigatório.")
        .set_rule("even", |value: &Value, _: &RuleArgument| {
            value.as_i64().is_some_and(|n| n % 2 == 0)
        });

    // A single value
    let problems = validator.check(&json!("hi"), &RuleSet::new().rule("format", "numeric"), Some("Code"))?;
    println!("single value: {}", serde_json::to_string(&problems)?);

    // A mapping, rules declared as data
    let fields: FieldRuleMap = serde_json::from_value(json!({
        "user": {"required": true, "length_range": [3, 16], "label": {"en": "User", "pt": "Usuário"}},
        "email": {"format": "email"},
        "age": {"min_value": 18, "even": true},
        "address": {"with": {
            "city": {"required": true},
            "zip": {"regex": "^\\d{5}$"}
        }}
    }))?;

    let signup = Signup {
        user: "al".into(),
        email: "al@example".into(),
        age: 17,
        address: Address {
            city: String::new(),
            zip: "123".into(),
        },
    };

    let problems = validator.check_serialize(&signup, &fields)?;
    println!("signup: {}", serde_json::to_string_pretty(&problems)?);
    println!("messages: {:?}", problems.unique_messages());

    validator.set_locale("pt");
    let problems = validator.check_object(&json!({"user": ""}), &fields)?;
    println!("pt: {}", serde_json::to_string(&problems.strip_rule_names())?);

    Ok(())
}
