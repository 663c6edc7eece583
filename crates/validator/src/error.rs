//! Errors raised while checking values
//!
//! A failing rule is not an error: it becomes an entry in the
//! [`ProblemTree`](crate::ProblemTree). A [`CheckError`] means the rule set
//! itself is unusable (a malformed range, a format nobody registered, ...)
//! and aborts the whole checking call.

/// Result alias used throughout the crate.
pub type CheckResult<T> = Result<T, CheckError>;

// ============================================================================
// CHECK ERROR TYPE
// ============================================================================

/// Configuration error surfaced by a checking call.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CheckError {
    /// A rule received an argument it cannot work with, such as a range
    /// that is not a pair of integers.
    #[error("invalid argument for rule '{rule}': {reason}")]
    InvalidRuleArgument { rule: String, reason: String },

    /// The `format` rule referenced a format that is not registered.
    #[error("format '{format}' is not available")]
    FormatResolution { format: String },

    /// A locale-keyed `format` rule has no entry for the active locale.
    #[error("format for locale '{locale}' is not available")]
    FormatLocale { locale: String },

    /// A rule set referenced an unregistered rule while unknown rules are
    /// rejected.
    #[error("rule '{rule}' is not registered")]
    UnknownRule { rule: String },

    /// A rule set could not be decoded.
    #[error("invalid rule set: {reason}")]
    InvalidRuleSet { reason: String },

    /// Converting a checked object or a configuration document failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

impl CheckError {
    /// Creates an invalid-argument error for `rule`.
    pub fn invalid_argument(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRuleArgument {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for an unregistered format.
    pub fn format_not_found(format: impl Into<String>) -> Self {
        Self::FormatResolution {
            format: format.into(),
        }
    }

    /// Creates an error for a missing locale in a locale-keyed format.
    pub fn format_locale(locale: impl Into<String>) -> Self {
        Self::FormatLocale {
            locale: locale.into(),
        }
    }

    /// Creates an error for an unregistered rule.
    pub fn unknown_rule(rule: impl Into<String>) -> Self {
        Self::UnknownRule { rule: rule.into() }
    }

    /// Creates a rule set decoding error.
    pub fn invalid_rule_set(reason: impl Into<String>) -> Self {
        Self::InvalidRuleSet {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRuleArgument { .. } => "invalid_rule_argument",
            Self::FormatResolution { .. } => "format_not_found",
            Self::FormatLocale { .. } => "format_locale_not_found",
            Self::UnknownRule { .. } => "unknown_rule",
            Self::InvalidRuleSet { .. } => "invalid_rule_set",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Returns `true` for errors raised by the `format` rule.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::FormatResolution { .. } | Self::FormatLocale { .. })
    }
}
