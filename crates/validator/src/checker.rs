//! The structural checker
//!
//! [`Validator`] owns every registry of one checking setup. It is built
//! once, configured, then used for any number of checks:
//!
//! ```rust
//! use rulecheck::{FieldRuleMap, RuleSet, Validator};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator.set_message("min_value", "{label} must be at least {min_value}.");
//!
//! let fields = FieldRuleMap::new().field("age", RuleSet::new().rule("min_value", 18));
//! let problems = validator.check_object(&json!({"age": 16}), &fields).unwrap();
//! assert_eq!(problems.lookup(&["age", "min_value"]), Some("age must be at least 18."));
//! ```

use crate::accessor::StructuralAccessor;
use crate::config::{UnknownRulePolicy, ValidatorConfig};
use crate::error::{CheckError, CheckResult};
use crate::message::{LocaleMessages, MessageCatalog, Messages};
use crate::problems::ProblemTree;
use crate::registry::{Predicate, RuleRegistry};
use crate::rule::{FieldRuleMap, RuleSet, is_meta_key};
use crate::value::as_field_mapping;
use indexmap::IndexMap;
use rulecheck_formats::{FormatMatcher, FormatRegistry, FormatResolver};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::{debug, debug_span, trace};

// Value of a field missing from the checked mapping.
static MISSING: Value = Value::String(String::new());

/// Checks values and structures against rule sets.
///
/// Configuration calls return `&mut Self` so they can be chained. Checks
/// take `&self` and never change the validator.
pub struct Validator {
    config: ValidatorConfig,
    rules: RuleRegistry,
    formats: FormatRegistry,
    messages: MessageCatalog,
}

impl Validator {
    /// Creates a validator with the default configuration.
    pub fn new() -> Self {
        Self::from_config(ValidatorConfig::default())
    }

    /// Creates a validator whose default locale is `locale`.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self::from_config(ValidatorConfig::default().with_locale(locale))
    }

    /// Creates a validator from a configuration.
    pub fn from_config(config: ValidatorConfig) -> Self {
        debug!(
            locale = %config.locale,
            unknown_rules = ?config.unknown_rules,
            "creating validator"
        );
        Self {
            rules: RuleRegistry::with_regex_cache_capacity(config.regex_cache_capacity),
            formats: FormatRegistry::with_config(config.formats.clone()),
            messages: MessageCatalog::new(config.locale.clone()),
            config,
        }
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Registers a rule, replacing any rule of the same name.
    pub fn set_rule(
        &mut self,
        name: impl Into<String>,
        predicate: impl Predicate + 'static,
    ) -> &mut Self {
        self.rules.register(name, predicate);
        self
    }

    /// Removes a rule. Rule sets still naming it follow the unknown-rule
    /// policy.
    pub fn remove_rule(&mut self, name: &str) -> &mut Self {
        self.rules.unregister(name);
        self
    }

    /// Registers a format, replacing any format of the same name.
    pub fn set_format(
        &mut self,
        name: impl Into<String>,
        matcher: impl FormatMatcher + 'static,
    ) -> &mut Self {
        self.formats.register(name, matcher);
        self
    }

    /// Removes a format.
    pub fn remove_format(&mut self, name: &str) -> &mut Self {
        self.formats.unregister(name);
        self
    }

    /// Sets the template of `rule` in the default locale.
    pub fn set_message(
        &mut self,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.messages.set(rule, template, None);
        self
    }

    /// Sets the template of `rule` in `locale`.
    pub fn set_locale_message(
        &mut self,
        locale: &str,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.messages.set(rule, template, Some(locale));
        self
    }

    /// Replaces every template (locale, then rule name).
    pub fn set_messages(&mut self, messages: Messages) -> &mut Self {
        self.messages.set_all(messages);
        self
    }

    /// Removes the template of `rule` in the default locale.
    pub fn remove_message(&mut self, rule: &str) -> &mut Self {
        self.messages.remove(rule, None);
        self
    }

    /// Removes the template of `rule` in `locale`.
    pub fn remove_locale_message(&mut self, locale: &str, rule: &str) -> &mut Self {
        self.messages.remove(rule, Some(locale));
        self
    }

    /// Changes the default locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) -> &mut Self {
        let locale = locale.into();
        debug!(locale = %locale, "changing locale");
        self.messages.set_locale(locale.clone());
        self.config.locale = locale;
        self
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    /// Registered rule names, built-ins first.
    pub fn rules(&self) -> Vec<&str> {
        self.rules.names()
    }

    /// Registered format names, built-ins first.
    pub fn formats(&self) -> Vec<&str> {
        self.formats.names()
    }

    /// Every template, by locale.
    pub fn messages(&self) -> &Messages {
        self.messages.all()
    }

    /// Templates of `locale`, or of the default locale.
    pub fn messages_for_locale(&self, locale: Option<&str>) -> Option<&LocaleMessages> {
        self.messages.for_locale(locale)
    }

    /// Template of `rule`, or `""`.
    pub fn rule_message(&self, rule: &str, locale: Option<&str>) -> &str {
        self.messages.template(rule, locale)
    }

    /// Default locale.
    pub fn locale(&self) -> &str {
        self.messages.locale()
    }

    /// Active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The rule registry.
    pub fn rule_registry(&self) -> &RuleRegistry {
        &self.rules
    }

    /// The format registry.
    pub fn format_registry(&self) -> &FormatRegistry {
        &self.formats
    }

    /// The message catalog.
    pub fn message_catalog(&self) -> &MessageCatalog {
        &self.messages
    }

    // ------------------------------------------------------------------------
    // Checking
    // ------------------------------------------------------------------------

    /// Checks one value.
    ///
    /// Returns [`ProblemTree::Rules`] with a message per failed rule.
    /// `label` is used by messages when `rules` has no label of its own.
    pub fn check(
        &self,
        value: &Value,
        rules: &RuleSet,
        label: Option<&str>,
    ) -> CheckResult<ProblemTree> {
        let _span = debug_span!("check", rules = rules.len()).entered();
        self.check_rules(value, rules, label).map(ProblemTree::Rules)
    }

    /// Checks the fields of a mapping.
    ///
    /// Only fields named in `fields` are checked; a missing field reads
    /// as `""`. Returns [`ProblemTree::Fields`] holding failed fields only.
    pub fn check_mapping(
        &self,
        values: &Map<String, Value>,
        fields: &FieldRuleMap,
    ) -> CheckResult<ProblemTree> {
        let _span = debug_span!("check_mapping", fields = fields.len()).entered();
        self.check_fields(values, fields).map(ProblemTree::Fields)
    }

    /// Checks the fields of any object that can present itself as a
    /// mapping.
    pub fn check_object<A>(&self, object: &A, fields: &FieldRuleMap) -> CheckResult<ProblemTree>
    where
        A: StructuralAccessor + ?Sized,
    {
        let values = object.to_field_mapping();
        self.check_mapping(&values, fields)
    }

    /// Checks the fields of any serializable object.
    pub fn check_serialize<T>(&self, object: &T, fields: &FieldRuleMap) -> CheckResult<ProblemTree>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(object)?;
        self.check_object(&value, fields)
    }

    fn check_rules(
        &self,
        value: &Value,
        rules: &RuleSet,
        label: Option<&str>,
    ) -> CheckResult<IndexMap<String, String>> {
        let locale = self.locale();
        let mut problems = IndexMap::new();

        for (rule, argument) in rules.rules() {
            if is_meta_key(rule) {
                continue;
            }
            match self.rules.evaluate(value, rule, argument, &self.formats, locale)? {
                Some(true) => {}
                Some(false) => {
                    trace!(rule, "rule failed");
                    let message = self.messages.render(value, rule, rules, Some(locale), label);
                    problems.insert(rule.to_string(), message);
                }
                None => match self.config.unknown_rules {
                    UnknownRulePolicy::Ignore => debug!(rule, "skipping unknown rule"),
                    UnknownRulePolicy::Reject => return Err(CheckError::unknown_rule(rule)),
                },
            }
        }

        Ok(problems)
    }

    fn check_fields(
        &self,
        values: &Map<String, Value>,
        fields: &FieldRuleMap,
    ) -> CheckResult<IndexMap<String, ProblemTree>> {
        let mut problems = IndexMap::new();

        for (field, rules) in fields {
            let value = values.get(field);

            if let Some(nested) = rules.nested() {
                trace!(field = %field, "descending into nested fields");
                let mapping = value.map_or_else(|| Cow::Owned(Map::new()), as_field_mapping);
                let found = self.check_fields(&mapping, nested)?;
                if !found.is_empty() {
                    problems.insert(field.clone(), ProblemTree::Fields(found));
                }
                continue;
            }

            let found = self.check_rules(value.unwrap_or(&MISSING), rules, Some(field))?;
            if !found.is_empty() {
                problems.insert(field.clone(), ProblemTree::Rules(found));
            }
        }

        Ok(problems)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .field("rules", &self.rules)
            .field("formats", &self.formats)
            .field("messages", &self.messages)
            .finish()
    }
}
