//! Character-class formats

use crate::resolver::FormatContext;
use regex::Regex;
use std::sync::LazyLock;

// Two or more letters, then words joined by a space, dot, dash or apostrophe.
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\p{L}{2,}(( |\.|-|'|\. )?\p{L}+\.?)*)?$").expect("valid name regex")
});

/// Matches anything.
pub fn anything(_text: &str, _ctx: &FormatContext<'_>) -> bool {
    true
}

/// Person-like names: `Bob`, `Mary Jane`, `Anne O'Neil`, `Tolkien J. R.`.
///
/// The first word needs at least two letters.
pub fn name(text: &str, _ctx: &FormatContext<'_>) -> bool {
    NAME.is_match(text)
}

/// Letters, digits and underscores.
pub fn word(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Letters and digits.
pub fn alphanumeric(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.chars().all(char::is_alphanumeric)
}

/// Letters only.
pub fn alpha(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.chars().all(char::is_alphabetic)
}

/// Character codes 0-127.
pub fn ascii(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatConfig;
    use rstest::rstest;

    fn check(f: fn(&str, &FormatContext<'_>) -> bool, text: &str) -> bool {
        let config = FormatConfig::default();
        f(
            text,
            &FormatContext {
                config: &config,
                separator: None,
            },
        )
    }

    #[rstest]
    #[case("", true)]
    #[case("Bob", true)]
    #[case("Mary Jane", true)]
    #[case("Anne O'Neil", true)]
    #[case("O'Neil", false)]
    #[case("J. R. R. Tolkien", false)]
    #[case("Tolkien J. R.", true)]
    #[case("José", true)]
    #[case("Jean-Luc", true)]
    #[case("B", false)]
    #[case("Bob2", false)]
    #[case("Bob  Smith", false)]
    fn name_format(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(check(name, text), expected, "{text:?}");
    }

    #[rstest]
    #[case("hello_world", true)]
    #[case("abc123", true)]
    #[case("", true)]
    #[case("hello world", false)]
    #[case("a-b", false)]
    fn word_format(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(check(word, text), expected);
    }

    #[test]
    fn letter_classes() {
        assert!(check(alpha, "abcÉ"));
        assert!(!check(alpha, "abc1"));
        assert!(check(alphanumeric, "abc1"));
        assert!(!check(alphanumeric, "abc_1"));
        assert!(check(ascii, "plain text!"));
        assert!(!check(ascii, "naïve"));
        assert!(check(anything, "\u{0}whatever"));
    }
}
