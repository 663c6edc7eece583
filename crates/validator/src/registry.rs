//! Instance-scoped registry of named rules

use crate::error::CheckResult;
use crate::rule::RuleArgument;
use crate::rules::{self, RegexCache};
use indexmap::IndexMap;
use rulecheck_formats::FormatResolver;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// Default number of compiled `regex` patterns kept per registry.
pub const DEFAULT_REGEX_CACHE_CAPACITY: u64 = 256;

// ============================================================================
// PREDICATES
// ============================================================================

/// A user-defined rule.
///
/// Implemented for any `Fn(&Value, &RuleArgument) -> bool`, so closures can
/// be registered directly:
///
/// ```rust
/// use rulecheck::{RuleArgument, RuleRegistry};
/// use serde_json::{Value, json};
///
/// let mut rules = RuleRegistry::new();
/// rules.register("even", |value: &Value, _: &RuleArgument| {
///     value.as_i64().is_some_and(|n| n % 2 == 0)
/// });
/// assert!(rules.contains("even"));
/// ```
pub trait Predicate: Send + Sync {
    /// Returns `true` when `value` satisfies the rule.
    fn test(&self, value: &Value, argument: &RuleArgument) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value, &RuleArgument) -> bool + Send + Sync,
{
    fn test(&self, value: &Value, argument: &RuleArgument) -> bool {
        self(value, argument)
    }
}

/// Signature of the built-in rules.
///
/// Built-ins may reject their argument, which user predicates cannot.
pub type BuiltinRule = fn(&Value, &RuleArgument, &RuleContext<'_>) -> CheckResult<bool>;

/// What a built-in rule may consult besides the value and its argument.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    rule: &'a str,
    locale: &'a str,
    formats: &'a dyn FormatResolver,
    regexes: &'a RegexCache,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(
        rule: &'a str,
        locale: &'a str,
        formats: &'a dyn FormatResolver,
        regexes: &'a RegexCache,
    ) -> Self {
        Self {
            rule,
            locale,
            formats,
            regexes,
        }
    }

    /// Name the rule was invoked under.
    pub fn rule(&self) -> &'a str {
        self.rule
    }

    /// Active locale, used by locale-keyed format specs.
    pub fn locale(&self) -> &'a str {
        self.locale
    }

    /// Formats available to the `format` rule.
    pub fn formats(&self) -> &'a dyn FormatResolver {
        self.formats
    }

    pub(crate) fn regexes(&self) -> &'a RegexCache {
        self.regexes
    }
}

#[derive(Clone)]
enum RuleEntry {
    Builtin(BuiltinRule),
    Custom(Arc<dyn Predicate>),
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Registry of all rules known to one validator.
///
/// Seeded with the built-in rules. Registering a rule under an existing
/// name replaces it, built-ins included.
pub struct RuleRegistry {
    rules: IndexMap<String, RuleEntry>,
    regexes: RegexCache,
}

impl RuleRegistry {
    /// Creates a registry with the built-in rules.
    pub fn new() -> Self {
        Self::with_regex_cache_capacity(DEFAULT_REGEX_CACHE_CAPACITY)
    }

    /// Creates a registry whose `regex` rule keeps at most `capacity`
    /// compiled patterns.
    pub fn with_regex_cache_capacity(capacity: u64) -> Self {
        let mut registry = Self {
            rules: IndexMap::new(),
            regexes: RegexCache::new(capacity),
        };
        registry.register_builtins();
        registry
    }

    /// Registers a rule, replacing any rule of the same name.
    pub fn register(&mut self, name: impl Into<String>, predicate: impl Predicate + 'static) {
        let name = name.into();
        debug!(rule = %name, "registering rule");
        self.rules.insert(name, RuleEntry::Custom(Arc::new(predicate)));
    }

    /// Removes a rule. Built-ins can be removed too.
    ///
    /// Returns `true` if the rule existed.
    pub fn unregister(&mut self, name: &str) -> bool {
        debug!(rule = %name, "unregistering rule");
        self.rules.shift_remove(name).is_some()
    }

    /// Check if a rule exists
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns `true` if `name` is currently served by a built-in.
    pub fn is_builtin(&self, name: &str) -> bool {
        matches!(self.rules.get(name), Some(RuleEntry::Builtin(_)))
    }

    /// Rule names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Drops user rules and restores every built-in.
    pub fn reset(&mut self) {
        self.rules.clear();
        self.regexes.clear();
        self.register_builtins();
    }

    /// Number of compiled patterns currently cached.
    pub fn cached_patterns(&self) -> u64 {
        self.regexes.len()
    }

    /// Evaluates one rule.
    ///
    /// Returns `Ok(None)` when no rule is registered under `rule`; the
    /// caller decides whether that is an error.
    pub fn evaluate(
        &self,
        value: &Value,
        rule: &str,
        argument: &RuleArgument,
        formats: &dyn FormatResolver,
        locale: &str,
    ) -> CheckResult<Option<bool>> {
        let Some(entry) = self.rules.get(rule) else {
            return Ok(None);
        };

        let passed = match entry {
            RuleEntry::Builtin(func) => {
                let ctx = RuleContext::new(rule, locale, formats, &self.regexes);
                func(value, argument, &ctx)?
            }
            RuleEntry::Custom(predicate) => predicate.test(value, argument),
        };

        trace!(rule, passed, "rule evaluated");
        Ok(Some(passed))
    }

    fn register_builtins(&mut self) {
        for (name, func) in rules::ALL {
            self.rules
                .insert((*name).to_string(), RuleEntry::Builtin(*func));
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
