//! The format resolution seam
//!
//! The rule evaluator only knows formats through [`FormatResolver`]. A
//! resolver hands back a [`ResolvedFormat`] that binds the matcher to the
//! configuration it should run against.

use crate::config::FormatConfig;

// ============================================================================
// MATCHER
// ============================================================================

/// Everything a matcher may consult besides the text itself.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    /// Active format configuration.
    pub config: &'a FormatConfig,
    /// Separator override from a parameterized `format` rule.
    pub separator: Option<&'a str>,
}

/// A named value-shape check.
///
/// Implemented for any `Fn(&str) -> bool`, so plain closures can be
/// registered directly.
pub trait FormatMatcher: Send + Sync {
    /// Returns `true` when `text` has this format.
    fn matches(&self, text: &str, ctx: &FormatContext<'_>) -> bool;
}

impl<F> FormatMatcher for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, text: &str, _ctx: &FormatContext<'_>) -> bool {
        self(text)
    }
}

/// Signature of the built-in formats.
pub type BuiltinFormat = fn(&str, &FormatContext<'_>) -> bool;

/// Adapter that lets a built-in function pointer act as a matcher.
#[derive(Debug, Clone, Copy)]
pub struct Builtin(pub BuiltinFormat);

impl FormatMatcher for Builtin {
    fn matches(&self, text: &str, ctx: &FormatContext<'_>) -> bool {
        (self.0)(text, ctx)
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// A format found by name, ready to be matched.
#[derive(Clone, Copy)]
pub struct ResolvedFormat<'a> {
    name: &'a str,
    matcher: &'a dyn FormatMatcher,
    config: &'a FormatConfig,
}

impl<'a> ResolvedFormat<'a> {
    /// Binds a matcher to its name and configuration.
    pub fn new(name: &'a str, matcher: &'a dyn FormatMatcher, config: &'a FormatConfig) -> Self {
        Self {
            name,
            matcher,
            config,
        }
    }

    /// The registered name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Matches `text`, optionally overriding the separator.
    pub fn matches(&self, text: &str, separator: Option<&str>) -> bool {
        let ctx = FormatContext {
            config: self.config,
            separator,
        };
        self.matcher.matches(text, &ctx)
    }
}

impl std::fmt::Debug for ResolvedFormat<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFormat")
            .field("name", &self.name)
            .field("matcher", &"<matcher>")
            .finish()
    }
}

/// Looks formats up by name.
pub trait FormatResolver {
    /// Finds the format registered under `name`.
    fn resolve(&self, name: &str) -> Option<ResolvedFormat<'_>>;

    /// Names of every available format, in registration order.
    fn names(&self) -> Vec<&str>;
}
