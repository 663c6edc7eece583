//! Validator configuration
//!
//! # Examples
//!
//! ```rust
//! use rulecheck::{UnknownRulePolicy, ValidatorConfig};
//!
//! let config = ValidatorConfig::from_json_str(r#"{"locale": "pt", "unknown_rules": "reject"}"#).unwrap();
//! assert_eq!(config.locale, "pt");
//! assert_eq!(config.unknown_rules, UnknownRulePolicy::Reject);
//! assert_eq!(config.regex_cache_capacity, 256);
//! ```

use crate::error::CheckResult;
use crate::registry::DEFAULT_REGEX_CACHE_CAPACITY;
use rulecheck_formats::FormatConfig;
use serde::{Deserialize, Serialize};

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// What a checking call does with a rule name nobody registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRulePolicy {
    /// Skip the rule as if it passed.
    #[default]
    Ignore,
    /// Abort with [`CheckError::UnknownRule`](crate::CheckError::UnknownRule).
    Reject,
}

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Default locale for messages, labels and locale-keyed formats.
    pub locale: String,

    /// Handling of unregistered rule names.
    pub unknown_rules: UnknownRulePolicy,

    /// Compiled patterns kept by the `regex` rule.
    pub regex_cache_capacity: u64,

    /// Settings of the built-in formats.
    pub formats: FormatConfig,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            unknown_rules: UnknownRulePolicy::Ignore,
            regex_cache_capacity: DEFAULT_REGEX_CACHE_CAPACITY,
            formats: FormatConfig::default(),
        }
    }
}

impl ValidatorConfig {
    /// Rejects unknown rule names, so typos in rule sets surface as errors.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unknown_rules: UnknownRulePolicy::Reject,
            ..Self::default()
        }
    }

    /// Parses a JSON document; missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> CheckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `RULECHECK_LOCALE` and `RULECHECK_STRICT` over the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(locale) = std::env::var("RULECHECK_LOCALE")
            && !locale.trim().is_empty()
        {
            config.locale = locale.trim().to_string();
        }

        if let Ok(strict) = std::env::var("RULECHECK_STRICT") {
            config.unknown_rules = match strict.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => UnknownRulePolicy::Reject,
                _ => UnknownRulePolicy::Ignore,
            };
        }

        config
    }

    /// Sets the default locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the unknown-rule policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_unknown_rules(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rules = policy;
        self
    }

    /// Sets the regex cache capacity.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_regex_cache_capacity(mut self, capacity: u64) -> Self {
        self.regex_cache_capacity = capacity;
        self
    }

    /// Sets the format settings.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_formats(mut self, formats: FormatConfig) -> Self {
        self.formats = formats;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.unknown_rules, UnknownRulePolicy::Ignore);
        assert_eq!(config.formats.decimal_separator, ".");
    }

    #[test]
    fn strict_preset() {
        assert_eq!(ValidatorConfig::strict().unknown_rules, UnknownRulePolicy::Reject);
        assert_eq!(ValidatorConfig::strict().locale, "en");
    }

    #[test]
    fn nested_format_settings_from_json() {
        let config = ValidatorConfig::from_json_str(
            r#"{"formats": {"decimal_separator": ",", "date_format": "%d/%m/%Y"}}"#,
        )
        .unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.formats.decimal_separator, ",");
        assert_eq!(config.formats.date_format, "%d/%m/%Y");
        assert_eq!(config.formats.time_format, "%H:%M");
    }

    #[test]
    fn bad_json_is_a_serialization_error() {
        let err = ValidatorConfig::from_json_str(r#"{"unknown_rules": "explode"}"#).unwrap_err();
        assert_eq!(err.code(), "serialization");
    }

    #[test]
    fn builder_chain() {
        let config = ValidatorConfig::default()
            .with_locale("pt")
            .with_unknown_rules(UnknownRulePolicy::Reject)
            .with_regex_cache_capacity(8)
            .with_formats(FormatConfig::day_first());
        assert_eq!(config.locale, "pt");
        assert_eq!(config.regex_cache_capacity, 8);
        assert_eq!(config.formats.date_format, "%d/%m/%Y");
    }
}
