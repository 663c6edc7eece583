//! `regex` and its compiled-pattern cache

use crate::error::{CheckError, CheckResult};
use crate::registry::RuleContext;
use crate::rule::RuleArgument;
use crate::value::text_of;
use regex::Regex;
use serde_json::Value;

/// Bounded LRU cache of compiled patterns, shared by every `regex` rule of
/// one registry.
pub(crate) struct RegexCache {
    cache: moka::sync::Cache<String, Regex>,
}

impl RegexCache {
    pub(crate) fn new(capacity: u64) -> Self {
        Self {
            cache: moka::sync::Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the compiled pattern, compiling it on a miss.
    pub(crate) fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex);
        }
        let regex = Regex::new(pattern)?;
        self.cache.insert(pattern.to_string(), regex.clone());
        Ok(regex)
    }

    pub(crate) fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub(crate) fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }
}

/// Passes when the pattern matches somewhere in the value's text.
///
/// Anchor with `^...$` to match the whole value.
pub(super) fn regex(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let RuleArgument::String(pattern) = argument else {
        return Err(CheckError::invalid_argument(
            ctx.rule(),
            format!("expected a pattern string, got {}", argument.kind()),
        ));
    };
    let regex = ctx
        .regexes()
        .get_or_compile(pattern)
        .map_err(|e| CheckError::invalid_argument(ctx.rule(), e.to_string()))?;
    Ok(text_of(value).is_some_and(|text| regex.is_match(&text)))
}
