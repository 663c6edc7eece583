//! Rule sets and field rule maps

use super::{FormatSpec, Label, RuleArgument, Scalar};
use crate::error::{CheckError, CheckResult};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Key holding a nested [`FieldRuleMap`].
pub const WITH: &str = "with";

/// Key holding the field [`Label`].
pub const LABEL: &str = "label";

/// Key of the `format` rule, whose object arguments are format specs.
pub const FORMAT: &str = "format";

/// Returns `true` for keys that configure a rule set instead of naming a
/// rule.
pub fn is_meta_key(key: &str) -> bool {
    key == WITH || key == LABEL
}

// ============================================================================
// RULE SET
// ============================================================================

/// Rules applied to one value, in declaration order.
///
/// ```rust
/// use rulecheck::{FieldRuleMap, RuleSet};
///
/// let name = RuleSet::new()
///     .rule("required", true)
///     .rule("length_range", [2, 60])
///     .with_label("Name");
///
/// let address = RuleSet::new().with_fields(
///     FieldRuleMap::new().field("zip", RuleSet::new().rule("format", "natural")),
/// );
/// assert_eq!(name.len(), 2);
/// assert!(address.nested().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: IndexMap<String, RuleArgument>,
    label: Option<Label>,
    with: Option<FieldRuleMap>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, replacing any rule of the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<String>, argument: impl Into<RuleArgument>) -> Self {
        self.rules.insert(name.into(), argument.into());
        self
    }

    /// Sets the label used by messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Checks the value as a structure against `fields` instead of
    /// evaluating rules on it.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fields(mut self, fields: FieldRuleMap) -> Self {
        self.with = Some(fields);
        self
    }

    /// Inserts a rule, returning the argument it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        argument: impl Into<RuleArgument>,
    ) -> Option<RuleArgument> {
        self.rules.insert(name.into(), argument.into())
    }

    /// Removes a rule, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<RuleArgument> {
        self.rules.shift_remove(name)
    }

    /// Argument of a rule.
    pub fn get(&self, name: &str) -> Option<&RuleArgument> {
        self.rules.get(name)
    }

    /// Check if a rule is declared
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &RuleArgument)> {
        self.rules.iter().map(|(name, arg)| (name.as_str(), arg))
    }

    /// Label option, if any.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Nested field rules declared under `with`.
    pub fn nested(&self) -> Option<&FieldRuleMap> {
        self.with.as_ref()
    }

    /// Number of rules, meta keys excluded.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decodes a rule set from its JSON object form.
    pub fn from_json_map(entries: &Map<String, Value>) -> CheckResult<Self> {
        let mut rule_set = Self::new();
        for (key, value) in entries {
            match key.as_str() {
                LABEL => rule_set.label = Some(decode_label(value)?),
                WITH => match value {
                    Value::Object(fields) => {
                        rule_set.with = Some(FieldRuleMap::from_json_map(fields)?);
                    }
                    other => {
                        return Err(CheckError::invalid_rule_set(format!(
                            "'with' must map field names to rule sets, got {}",
                            crate::value::type_name(other)
                        )));
                    }
                },
                rule => {
                    rule_set
                        .rules
                        .insert(rule.to_string(), decode_argument(rule, value)?);
                }
            }
        }
        Ok(rule_set)
    }
}

impl TryFrom<Value> for RuleSet {
    type Error = CheckError;

    fn try_from(value: Value) -> CheckResult<Self> {
        match value {
            Value::Object(entries) => Self::from_json_map(&entries),
            other => Err(CheckError::invalid_rule_set(format!(
                "a rule set must be an object, got {}",
                crate::value::type_name(&other)
            ))),
        }
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.rules.len() + usize::from(self.label.is_some()) + usize::from(self.with.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (name, argument) in &self.rules {
            map.serialize_entry(name, argument)?;
        }
        if let Some(label) = &self.label {
            map.serialize_entry(LABEL, label)?;
        }
        if let Some(with) = &self.with {
            map.serialize_entry(WITH, with)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_json_map(&entries).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// FIELD RULE MAP
// ============================================================================

/// Rule sets per field of a structure, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRuleMap {
    fields: IndexMap<String, RuleSet>,
}

impl FieldRuleMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any field of the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: RuleSet) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// Inserts a field, returning the rule set it replaced.
    pub fn insert(&mut self, name: impl Into<String>, rules: RuleSet) -> Option<RuleSet> {
        self.fields.insert(name.into(), rules)
    }

    /// Removes a field, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<RuleSet> {
        self.fields.shift_remove(name)
    }

    /// Rule set of a field.
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.fields.get(name)
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, RuleSet> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decodes a field rule map from its JSON object form.
    pub fn from_json_map(entries: &Map<String, Value>) -> CheckResult<Self> {
        entries
            .iter()
            .map(|(field, rules)| match rules {
                Value::Object(rules) => Ok((field.clone(), RuleSet::from_json_map(rules)?)),
                other => Err(CheckError::invalid_rule_set(format!(
                    "rules of field '{field}' must be an object, got {}",
                    crate::value::type_name(other)
                ))),
            })
            .collect()
    }
}

impl TryFrom<Value> for FieldRuleMap {
    type Error = CheckError;

    fn try_from(value: Value) -> CheckResult<Self> {
        match value {
            Value::Object(entries) => Self::from_json_map(&entries),
            other => Err(CheckError::invalid_rule_set(format!(
                "a field rule map must be an object, got {}",
                crate::value::type_name(&other)
            ))),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, RuleSet)> for FieldRuleMap {
    fn from_iter<I: IntoIterator<Item = (K, RuleSet)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldRuleMap {
    type Item = (&'a String, &'a RuleSet);
    type IntoIter = indexmap::map::Iter<'a, String, RuleSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ============================================================================
// DECODING
// ============================================================================

fn decode_label(value: &Value) -> CheckResult<Label> {
    match value {
        Value::String(text) => Ok(Label::Plain(text.clone())),
        Value::Object(texts) => Ok(Label::Localized(decode_string_map(LABEL, texts)?)),
        other => Err(CheckError::invalid_rule_set(format!(
            "'label' must be a string or a locale map, got {}",
            crate::value::type_name(other)
        ))),
    }
}

fn decode_argument(rule: &str, value: &Value) -> CheckResult<RuleArgument> {
    match value {
        Value::String(name) if rule == FORMAT => Ok(RuleArgument::Format(FormatSpec::Name(name.clone()))),
        Value::Object(entries) if rule == FORMAT => decode_format_spec(entries).map(RuleArgument::Format),
        Value::Array(items) => items
            .iter()
            .map(|item| decode_scalar(rule, item))
            .collect::<CheckResult<Vec<_>>>()
            .map(RuleArgument::List),
        other => match decode_scalar(rule, other)? {
            Scalar::Bool(b) => Ok(RuleArgument::Bool(b)),
            Scalar::Integer(i) => Ok(RuleArgument::Integer(i)),
            Scalar::Float(x) => Ok(RuleArgument::Float(x)),
            Scalar::String(s) => Ok(RuleArgument::String(s)),
        },
    }
}

fn decode_scalar(rule: &str, value: &Value) -> CheckResult<Scalar> {
    match value {
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Scalar::Integer(i)),
            None => n.as_f64().map(Scalar::Float).ok_or_else(|| {
                CheckError::invalid_rule_set(format!("rule '{rule}' has an unrepresentable number"))
            }),
        },
        Value::String(s) => Ok(Scalar::String(s.clone())),
        other => Err(CheckError::invalid_rule_set(format!(
            "rule '{rule}' cannot take {} arguments",
            crate::value::type_name(other)
        ))),
    }
}

fn decode_format_spec(entries: &Map<String, Value>) -> CheckResult<FormatSpec> {
    let Some(name) = entries.get("name") else {
        return decode_string_map(FORMAT, entries).map(FormatSpec::Localized);
    };
    let Value::String(name) = name else {
        return Err(CheckError::invalid_rule_set("format 'name' must be a string"));
    };
    let separator = match entries.get("separator") {
        None | Some(Value::Null) => None,
        Some(Value::String(separator)) => Some(separator.clone()),
        Some(_) => {
            return Err(CheckError::invalid_rule_set("format 'separator' must be a string"));
        }
    };
    Ok(FormatSpec::Parameterized {
        name: name.clone(),
        separator,
    })
}

fn decode_string_map(key: &str, entries: &Map<String, Value>) -> CheckResult<IndexMap<String, String>> {
    entries
        .iter()
        .map(|(locale, text)| match text {
            Value::String(text) => Ok((locale.clone(), text.clone())),
            _ => Err(CheckError::invalid_rule_set(format!(
                "'{key}' entry for locale '{locale}' must be a string"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn builder_keeps_declaration_order() {
        let rules = RuleSet::new()
            .rule("required", true)
            .rule("min_length", 2)
            .rule("format", "name");
        let names: Vec<_> = rules.rules().map(|(name, _)| name).collect();
        assert_eq!(names, ["required", "min_length", "format"]);
    }

    #[test]
    fn decodes_natural_json() {
        let fields = FieldRuleMap::try_from(json!({
            "name": {"length_range": [5, 60], "label": "Name"},
            "birth": {"format": {"en": "date_mdy", "pt": "date_dmy"}},
            "due": {"format": {"name": "date_dmy", "separator": "-"}},
            "age": {"min_value": 18, "format": "natural"},
            "address": {"with": {"zip": {"required": true}}}
        }))
        .unwrap();

        let name = fields.get("name").unwrap();
        assert_eq!(name.get("length_range"), Some(&RuleArgument::from([5, 60])));
        assert_eq!(name.label(), Some(&Label::from("Name")));
        assert_eq!(name.len(), 1);

        assert_eq!(
            fields.get("birth").unwrap().get("format"),
            Some(&RuleArgument::Format(FormatSpec::localized([
                ("en", "date_mdy"),
                ("pt", "date_dmy")
            ])))
        );
        assert_eq!(
            fields.get("due").unwrap().get("format"),
            Some(&RuleArgument::Format(FormatSpec::with_separator("date_dmy", "-")))
        );
        assert_eq!(
            fields.get("age").unwrap().get("format"),
            Some(&RuleArgument::Format(FormatSpec::Name("natural".into())))
        );

        let nested = fields.get("address").unwrap().nested().unwrap();
        assert_eq!(nested.get("zip").unwrap().get("required"), Some(&RuleArgument::Bool(true)));
    }

    #[test]
    fn rejects_malformed_rule_sets() {
        let err = RuleSet::try_from(json!({"in": {"a": 1}})).unwrap_err();
        assert!(matches!(err, CheckError::InvalidRuleSet { .. }));

        assert!(RuleSet::try_from(json!({"label": 5})).is_err());
        assert!(RuleSet::try_from(json!({"with": "x"})).is_err());
        assert!(RuleSet::try_from(json!({"in": [[1]]})).is_err());
        assert!(RuleSet::try_from(json!(["required"])).is_err());
        assert!(FieldRuleMap::try_from(json!({"name": "required"})).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let fields = FieldRuleMap::new()
            .field(
                "bar",
                RuleSet::new()
                    .with_label(Label::localized([("en", "Bar")]))
                    .with_fields(FieldRuleMap::new().field("x", RuleSet::new().rule("min_value", 101))),
            )
            .field("name", RuleSet::new().rule("length_range", (5, 60)));

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            json,
            json!({
                "bar": {"label": {"en": "Bar"}, "with": {"x": {"min_value": 101}}},
                "name": {"length_range": [5, 60]}
            })
        );

        let back: FieldRuleMap = serde_json::from_value(json).unwrap();
        assert_eq!(back.get("bar"), fields.get("bar"));
        assert_eq!(back.get("name").unwrap().get("length_range").unwrap().as_range(), Some((5, 60)));
    }
}
