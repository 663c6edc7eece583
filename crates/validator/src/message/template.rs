//! `{placeholder}` substitution

use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("valid placeholder regex"));

/// Values bound to placeholder names.
pub type Bindings = IndexMap<String, String>;

/// Replaces every bound `{name}` in `template`.
///
/// Substitution is single-pass: inserted text is never scanned for
/// placeholders again. Unbound placeholders are left as written.
///
/// ```rust
/// use rulecheck::message::{Bindings, render_template};
///
/// let mut bindings = Bindings::new();
/// bindings.insert("label".into(), "Age".into());
/// assert_eq!(render_template("{label} is {label}; {unknown}", &bindings), "Age is Age; {unknown}");
/// ```
pub fn render_template<'t>(template: &'t str, bindings: &Bindings) -> Cow<'t, str> {
    PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        bindings
            .get(&caps[1])
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// Names of the placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
