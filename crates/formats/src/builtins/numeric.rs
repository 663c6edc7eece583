//! Number-shaped formats

use crate::resolver::FormatContext;
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid numeric regex")
});

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn strip_minus(text: &str) -> &str {
    text.strip_prefix('-').unwrap_or(text)
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}

/// Splits `text` at the configured decimal separator, if present.
fn split_decimal<'t>(text: &'t str, ctx: &FormatContext<'_>) -> (&'t str, Option<&'t str>) {
    let separator = ctx.config.decimal_separator.as_str();
    if separator.is_empty() {
        return (text, None);
    }
    match text.split_once(separator) {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    }
}

/// Decimal notation with `.` and an optional exponent, surrounding
/// whitespace ignored. Whitespace alone is not a number.
pub fn numeric(text: &str, _ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || NUMERIC.is_match(text.trim())
}

/// Whole number with an optional leading `-`.
pub fn integer(text: &str, _ctx: &FormatContext<'_>) -> bool {
    let digits = strip_minus(text);
    text.is_empty() || (!digits.is_empty() && all_digits(digits))
}

/// Whole number without sign (>= 0).
pub fn natural(text: &str, _ctx: &FormatContext<'_>) -> bool {
    all_digits(text)
}

/// Optionally signed number using the configured decimal separator.
pub fn double(text: &str, ctx: &FormatContext<'_>) -> bool {
    if text.is_empty() {
        return true;
    }
    match split_decimal(strip_sign(text), ctx) {
        (whole, None) => !whole.is_empty() && all_digits(whole),
        (whole, Some(fraction)) => all_digits(whole) && !fraction.is_empty() && all_digits(fraction),
    }
}

fn fixed_point(text: &str, ctx: &FormatContext<'_>, max_places: usize) -> bool {
    if text.is_empty() {
        return true;
    }
    match split_decimal(text, ctx) {
        (whole, None) => !whole.is_empty() && all_digits(whole),
        (whole, Some(fraction)) => {
            all_digits(whole)
                && (1..=max_places).contains(&fraction.len())
                && all_digits(fraction)
        }
    }
}

/// Unsigned amount with up to two decimal places.
pub fn monetary(text: &str, ctx: &FormatContext<'_>) -> bool {
    fixed_point(text, ctx, 2)
}

/// Unsigned rate with up to three decimal places.
pub fn tax(text: &str, ctx: &FormatContext<'_>) -> bool {
    fixed_point(text, ctx, 3)
}
