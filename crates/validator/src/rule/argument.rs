//! Typed rule arguments

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SCALAR
// ============================================================================

/// A single candidate inside a list argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Returns the integer, if this is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Integer(i64::from(i))
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Integer(i)
    }
}

impl From<u32> for Scalar {
    fn from(i: u32) -> Self {
        Scalar::Integer(i64::from(i))
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

// ============================================================================
// FORMAT SPEC
// ============================================================================

/// Argument of the `format` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormatSpec {
    /// A format name, e.g. `"numeric"`.
    Name(String),
    /// Format name per locale, e.g. `{"en": "date_mdy", "pt": "date_dmy"}`.
    Localized(IndexMap<String, String>),
    /// Format name with extra options, e.g. `{"name": "date_dmy", "separator": "-"}`.
    Parameterized {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        separator: Option<String>,
    },
}

impl FormatSpec {
    /// Format chosen per locale.
    pub fn localized<L, N>(names: impl IntoIterator<Item = (L, N)>) -> Self
    where
        L: Into<String>,
        N: Into<String>,
    {
        Self::Localized(
            names
                .into_iter()
                .map(|(locale, name)| (locale.into(), name.into()))
                .collect(),
        )
    }

    /// Named format with a separator override.
    pub fn with_separator(name: impl Into<String>, separator: impl Into<String>) -> Self {
        Self::Parameterized {
            name: name.into(),
            separator: Some(separator.into()),
        }
    }

    /// Format name to use under `locale`.
    ///
    /// `None` only for a [`Localized`](Self::Localized) spec without that
    /// locale.
    pub fn name_for(&self, locale: &str) -> Option<&str> {
        match self {
            FormatSpec::Name(name) | FormatSpec::Parameterized { name, .. } => Some(name),
            FormatSpec::Localized(names) => names.get(locale).map(String::as_str),
        }
    }

    /// Separator override of a parameterized spec.
    pub fn separator(&self) -> Option<&str> {
        match self {
            FormatSpec::Parameterized { separator, .. } => separator.as_deref(),
            _ => None,
        }
    }
}

// ============================================================================
// RULE ARGUMENT
// ============================================================================

/// Argument given to a rule in a [`RuleSet`](super::RuleSet).
///
/// Two-element integer lists decoded from JSON stay [`List`](Self::List);
/// range rules accept both that and [`Pair`](Self::Pair).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleArgument {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// `(min, max)` bounds, in any order.
    Pair(i64, i64),
    List(Vec<Scalar>),
    Format(FormatSpec),
}

impl RuleArgument {
    /// Normalized `(min, max)` of a range argument.
    ///
    /// A [`Pair`](Self::Pair), or a [`List`](Self::List) of exactly two
    /// integers; bounds are swapped when given in descending order.
    pub fn as_range(&self) -> Option<(i64, i64)> {
        let (a, b) = match self {
            RuleArgument::Pair(a, b) => (*a, *b),
            RuleArgument::List(items) => match items.as_slice() {
                [a, b] => (a.as_integer()?, b.as_integer()?),
                _ => return None,
            },
            _ => return None,
        };
        Some((a.min(b), a.max(b)))
    }

    /// Name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RuleArgument::Bool(_) => "boolean",
            RuleArgument::Integer(_) => "integer",
            RuleArgument::Float(_) => "float",
            RuleArgument::String(_) => "string",
            RuleArgument::Pair(..) => "pair",
            RuleArgument::List(_) => "list",
            RuleArgument::Format(_) => "format spec",
        }
    }
}

/// Writes the argument the way messages show it: pairs as `min-max`,
/// lists as `a, b`, format specs by their name.
impl fmt::Display for RuleArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleArgument::Bool(b) => write!(f, "{b}"),
            RuleArgument::Integer(i) => write!(f, "{i}"),
            RuleArgument::Float(x) => write!(f, "{x}"),
            RuleArgument::String(s) => f.write_str(s),
            RuleArgument::Pair(a, b) => write!(f, "{}-{}", a.min(b), a.max(b)),
            RuleArgument::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            RuleArgument::Format(FormatSpec::Name(name) | FormatSpec::Parameterized { name, .. }) => {
                f.write_str(name)
            }
            RuleArgument::Format(FormatSpec::Localized(names)) => {
                f.write_str(names.values().next().map_or("", String::as_str))
            }
        }
    }
}

impl From<bool> for RuleArgument {
    fn from(b: bool) -> Self {
        RuleArgument::Bool(b)
    }
}

impl From<i32> for RuleArgument {
    fn from(i: i32) -> Self {
        RuleArgument::Integer(i64::from(i))
    }
}

impl From<i64> for RuleArgument {
    fn from(i: i64) -> Self {
        RuleArgument::Integer(i)
    }
}

impl From<u32> for RuleArgument {
    fn from(i: u32) -> Self {
        RuleArgument::Integer(i64::from(i))
    }
}

impl From<f64> for RuleArgument {
    fn from(x: f64) -> Self {
        RuleArgument::Float(x)
    }
}

impl From<&str> for RuleArgument {
    fn from(s: &str) -> Self {
        RuleArgument::String(s.to_string())
    }
}

impl From<String> for RuleArgument {
    fn from(s: String) -> Self {
        RuleArgument::String(s)
    }
}

impl From<(i64, i64)> for RuleArgument {
    fn from((min, max): (i64, i64)) -> Self {
        RuleArgument::Pair(min, max)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for RuleArgument {
    fn from(items: Vec<T>) -> Self {
        RuleArgument::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for RuleArgument {
    fn from(items: [T; N]) -> Self {
        RuleArgument::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<FormatSpec> for RuleArgument {
    fn from(spec: FormatSpec) -> Self {
        RuleArgument::Format(spec)
    }
}
