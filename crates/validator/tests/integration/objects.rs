//! Checking typed objects through accessors and serde.

use pretty_assertions::assert_eq;
use rulecheck::value::{Map, Value};
use rulecheck::{FieldRuleMap, RuleSet, StructuralAccessor, Validator};
use serde::Serialize;
use serde_json::json;
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Serialize)]
struct Address {
    street: String,
    zip: String,
}

#[derive(Serialize)]
struct Customer {
    name: String,
    age: u32,
    tags: Vec<String>,
    address: Address,
}

fn customer() -> Customer {
    Customer {
        name: "Al".into(),
        age: 17,
        tags: vec![],
        address: Address {
            street: "Main St".into(),
            zip: "1234".into(),
        },
    }
}

fn customer_rules() -> FieldRuleMap {
    FieldRuleMap::new()
        .field("name", RuleSet::new().rule("min_length", 3))
        .field("age", RuleSet::new().rule("value_range", [18, 130]))
        .field("tags", RuleSet::new().rule("min_count", 1))
        .field(
            "address",
            RuleSet::new().with_fields(
                FieldRuleMap::new()
                    .field("street", RuleSet::new().rule("required", true))
                    .field("zip", RuleSet::new().rule("regex", r"^\d{5}$")),
            ),
        )
}

#[test]
fn serializable_structs() {
    let problems = Validator::new()
        .check_serialize(&customer(), &customer_rules())
        .unwrap();
    assert_eq!(
        serde_json::to_value(&problems).unwrap(),
        json!({
            "name": {"min_length": ""},
            "age": {"value_range": ""},
            "tags": {"min_count": ""},
            "address": {"zip": {"regex": ""}}
        })
    );
}

struct Sensor {
    id: u32,
    reading: f64,
}

impl StructuralAccessor for Sensor {
    fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>> {
        let mut fields = Map::new();
        fields.insert("id".into(), json!(self.id));
        fields.insert("reading".into(), json!(self.reading));
        Cow::Owned(fields)
    }
}

#[test]
fn custom_accessor() {
    let fields = FieldRuleMap::new()
        .field("id", RuleSet::new().rule("min_value", 1))
        .field("reading", RuleSet::new().rule("value_range", (-40, 85)));
    let validator = Validator::new();

    let problems = validator
        .check_object(&Sensor { id: 0, reading: 90.5 }, &fields)
        .unwrap();
    assert_eq!(problems.len(), 2);

    assert!(
        validator
            .check_object(&Sensor { id: 7, reading: 21.0 }, &fields)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn std_hash_maps() {
    let mut values = HashMap::new();
    values.insert("code".to_string(), json!("ab-12"));
    let fields = FieldRuleMap::new().field("code", RuleSet::new().rule("format", "alphanumeric"));
    let problems = Validator::new().check_object(&values, &fields).unwrap();
    assert_eq!(problems.lookup(&["code", "format"]), Some(""));
}

#[test]
fn scalar_objects_read_as_position_zero() {
    let fields = FieldRuleMap::new().field("0", RuleSet::new().rule("min_value", 10));
    let problems = Validator::new().check_object(&json!(3), &fields).unwrap();
    assert_eq!(problems.lookup(&["0", "min_value"]), Some(""));
}
