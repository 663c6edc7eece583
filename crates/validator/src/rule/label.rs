//! Field labels

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Human-readable field name used by messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// Same text in every locale.
    Plain(String),
    /// Text per locale code.
    Localized(IndexMap<String, String>),
}

impl Label {
    /// Label text per locale.
    pub fn localized<L, T>(texts: impl IntoIterator<Item = (L, T)>) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        Self::Localized(
            texts
                .into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }

    /// Picks the text for `requested`, falling back to `default`, then to
    /// the first locale present, then to the empty string.
    pub fn resolve<'a>(&'a self, requested: Option<&str>, default: &str) -> &'a str {
        match self {
            Label::Plain(text) => text,
            Label::Localized(texts) => requested
                .and_then(|locale| texts.get(locale))
                .or_else(|| texts.get(default))
                .or_else(|| texts.values().next())
                .map_or("", String::as_str),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Plain(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Plain(text)
    }
}
