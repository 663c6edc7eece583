//! Problem messages
//!
//! Templates are stored per locale and rule name. A template may reference
//! any key of the failing rule set (`{min_length}`), the checked value
//! (`{value}`) and the field label (`{label}`):
//!
//! ```rust
//! use rulecheck::message::MessageCatalog;
//! use rulecheck::RuleSet;
//! use serde_json::json;
//!
//! let mut catalog = MessageCatalog::new("en");
//! catalog.set("length_range", "{label} must have from {min_length} to {max_length} characters.", None);
//!
//! let rules = RuleSet::new().rule("length_range", [5, 60]);
//! let message = catalog.render(&json!("Bob"), "length_range", &rules, None, Some("name"));
//! assert_eq!(message, "name must have from 5 to 60 characters.");
//! ```

mod template;

pub use template::{Bindings, placeholders, render_template};

use crate::rule::{LABEL, RuleArgument, RuleSet};
use crate::rules::{DERIVED_BOUNDS, format_name};
use crate::value::display_text;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder bound to the checked value.
pub const VALUE: &str = "value";

/// Templates of one locale, by rule name.
pub type LocaleMessages = IndexMap<String, String>;

/// Templates by locale, then rule name.
pub type Messages = IndexMap<String, LocaleMessages>;

/// Message templates of one validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    locale: String,
    messages: Messages,
}

impl MessageCatalog {
    /// Creates an empty catalog whose default locale is `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: Messages::new(),
        }
    }

    /// Default locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Changes the default locale. Stored templates are kept.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Sets the template of `rule` under `locale`, or the default locale.
    pub fn set(&mut self, rule: impl Into<String>, template: impl Into<String>, locale: Option<&str>) {
        let locale = locale.unwrap_or(&self.locale).to_string();
        self.messages
            .entry(locale)
            .or_default()
            .insert(rule.into(), template.into());
    }

    /// Replaces every template.
    pub fn set_all(&mut self, messages: Messages) {
        self.messages = messages;
    }

    /// Removes the template of `rule` under `locale`, or the default locale.
    pub fn remove(&mut self, rule: &str, locale: Option<&str>) -> Option<String> {
        let locale = locale.unwrap_or(&self.locale);
        self.messages.get_mut(locale)?.shift_remove(rule)
    }

    /// Every template, by locale.
    pub fn all(&self) -> &Messages {
        &self.messages
    }

    /// Templates of `locale`, or of the default locale.
    pub fn for_locale(&self, locale: Option<&str>) -> Option<&LocaleMessages> {
        self.messages.get(locale.unwrap_or(&self.locale))
    }

    /// Template of `rule`, or `""` when none is registered.
    pub fn template(&self, rule: &str, locale: Option<&str>) -> &str {
        self.for_locale(locale)
            .and_then(|templates| templates.get(rule))
            .map_or("", String::as_str)
    }

    /// Renders the message for a failed `rule`.
    ///
    /// Returns `""` when `rule` has no template. `label` is used only when
    /// `rule_set` carries no label of its own.
    pub fn render(
        &self,
        value: &Value,
        rule: &str,
        rule_set: &RuleSet,
        locale: Option<&str>,
        label: Option<&str>,
    ) -> String {
        let template = self.template(rule, locale);
        if template.is_empty() {
            return String::new();
        }
        let bindings = self.bindings(value, rule_set, locale, label);
        render_template(template, &bindings).into_owned()
    }

    /// Placeholder values available to messages of `rule_set`.
    pub fn bindings(
        &self,
        value: &Value,
        rule_set: &RuleSet,
        locale: Option<&str>,
        label: Option<&str>,
    ) -> Bindings {
        let active = locale.unwrap_or(&self.locale);
        let mut bindings = Bindings::new();

        for (rule, argument) in rule_set.rules() {
            bindings.insert(rule.to_string(), argument_text(rule, argument, active));
        }

        // length_range => min_length/max_length, etc.
        for (range_rule, min_key, max_key) in DERIVED_BOUNDS {
            if let Some((min, max)) = rule_set.get(range_rule).and_then(RuleArgument::as_range) {
                bindings
                    .entry((*min_key).to_string())
                    .or_insert_with(|| min.to_string());
                bindings
                    .entry((*max_key).to_string())
                    .or_insert_with(|| max.to_string());
            }
        }

        bindings.insert(VALUE.to_string(), display_text(value).into_owned());

        if let Some(label) = rule_set.label() {
            bindings.insert(LABEL.to_string(), label.resolve(locale, &self.locale).to_string());
        } else if let Some(label) = label {
            bindings.insert(LABEL.to_string(), label.to_string());
        }

        bindings
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LOCALE)
    }
}

fn argument_text(rule: &str, argument: &RuleArgument, locale: &str) -> String {
    if let Some(name) = format_name(argument, locale).filter(|_| rule == crate::rule::FORMAT) {
        return name.to_string();
    }
    let is_range_rule = DERIVED_BOUNDS.iter().any(|(range_rule, ..)| *range_rule == rule);
    match argument.as_range() {
        Some((min, max)) if is_range_rule => format!("{min}-{max}"),
        _ => argument.to_string(),
    }
}
