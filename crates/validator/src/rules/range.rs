//! Length, numeric value and list size rules

use crate::error::{CheckError, CheckResult};
use crate::registry::RuleContext;
use crate::rule::RuleArgument;
use crate::value::{length_of, number_of};
use serde_json::Value;

/// Range rules and the single-bound keys their bounds are published under
/// in messages.
pub(crate) const DERIVED_BOUNDS: &[(&str, &str, &str)] = &[
    ("length_range", "min_length", "max_length"),
    ("value_range", "min_value", "max_value"),
    ("count_range", "min_count", "max_count"),
];

enum Bounds {
    Exact(i64),
    Between(i64, i64),
}

impl Bounds {
    fn contains(&self, n: f64) -> bool {
        match *self {
            Bounds::Exact(x) => n == x as f64,
            Bounds::Between(min, max) => (min as f64) <= n && n <= (max as f64),
        }
    }
}

fn range_bounds(argument: &RuleArgument, ctx: &RuleContext<'_>) -> CheckResult<Bounds> {
    match argument {
        RuleArgument::Integer(n) => Ok(Bounds::Exact(*n)),
        RuleArgument::List(items) if items.len() != 2 => Err(CheckError::invalid_argument(
            ctx.rule(),
            format!("array size is {}, expected 2", items.len()),
        )),
        RuleArgument::Pair(..) | RuleArgument::List(_) => argument
            .as_range()
            .map(|(min, max)| Bounds::Between(min, max))
            .ok_or_else(|| {
                CheckError::invalid_argument(ctx.rule(), "min or max are not integer values")
            }),
        other => Err(CheckError::invalid_argument(
            ctx.rule(),
            format!("expected an integer or a pair of integers, got {}", other.kind()),
        )),
    }
}

fn integer_bound(argument: &RuleArgument, ctx: &RuleContext<'_>) -> CheckResult<i64> {
    match argument {
        RuleArgument::Integer(n) => Ok(*n),
        other => Err(CheckError::invalid_argument(
            ctx.rule(),
            format!("expected an integer, got {}", other.kind()),
        )),
    }
}

fn number_bound(argument: &RuleArgument, ctx: &RuleContext<'_>) -> CheckResult<f64> {
    match argument {
        RuleArgument::Integer(n) => Ok(*n as f64),
        RuleArgument::Float(x) => Ok(*x),
        other => Err(CheckError::invalid_argument(
            ctx.rule(),
            format!("expected a number, got {}", other.kind()),
        )),
    }
}

fn count_of(value: &Value) -> Option<i64> {
    value.as_array().map(|items| items.len() as i64)
}

// ============================================================================
// LENGTH
// ============================================================================

pub(super) fn min_length(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    Ok(length_of(value) as i64 >= integer_bound(argument, ctx)?)
}

pub(super) fn max_length(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    Ok(length_of(value) as i64 <= integer_bound(argument, ctx)?)
}

pub(super) fn length_range(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    Ok(range_bounds(argument, ctx)?.contains(length_of(value) as f64))
}

// ============================================================================
// NUMERIC VALUE
// ============================================================================

pub(super) fn min_value(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let bound = number_bound(argument, ctx)?;
    Ok(number_of(value).is_some_and(|n| n >= bound))
}

pub(super) fn max_value(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let bound = number_bound(argument, ctx)?;
    Ok(number_of(value).is_some_and(|n| n <= bound))
}

pub(super) fn value_range(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let bounds = range_bounds(argument, ctx)?;
    Ok(number_of(value).is_some_and(|n| bounds.contains(n)))
}

// ============================================================================
// LIST SIZE
// ============================================================================

pub(super) fn min_count(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let bound = integer_bound(argument, ctx)?;
    Ok(count_of(value).is_some_and(|n| n >= bound))
}

pub(super) fn max_count(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let bound = integer_bound(argument, ctx)?;
    Ok(count_of(value).is_some_and(|n| n <= bound))
}

pub(super) fn count_range(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let bounds = range_bounds(argument, ctx)?;
    Ok(count_of(value).is_some_and(|n| bounds.contains(n as f64)))
}
