//! Built-in rules
//!
//! Every rule takes the checked value, its argument and a
//! [`RuleContext`](crate::RuleContext). A rule returns `Ok(false)` when the
//! value breaks it and `Err` only when the argument itself is unusable.

mod candidates;
mod format;
mod pattern;
mod presence;
mod range;

pub(crate) use format::format_name;
pub(crate) use pattern::RegexCache;
pub(crate) use range::DERIVED_BOUNDS;

use crate::registry::BuiltinRule;

/// Built-in rule table, in registration order.
pub(crate) const ALL: &[(&str, BuiltinRule)] = &[
    ("required", presence::required),
    // Length
    ("min_length", range::min_length),
    ("max_length", range::max_length),
    ("length_range", range::length_range),
    // Numeric value
    ("min_value", range::min_value),
    ("max_value", range::max_value),
    ("value_range", range::value_range),
    // List size
    ("min_count", range::min_count),
    ("max_count", range::max_count),
    ("count_range", range::count_range),
    // Candidates
    ("in", candidates::is_in),
    ("not_in", candidates::not_in),
    ("start_with", candidates::start_with),
    ("not_start_with", candidates::not_start_with),
    ("end_with", candidates::end_with),
    ("not_end_with", candidates::not_end_with),
    ("contains", candidates::contains),
    ("not_contains", candidates::not_contains),
    // Patterns
    ("regex", pattern::regex),
    ("format", format::format),
];
