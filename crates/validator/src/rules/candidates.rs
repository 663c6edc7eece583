//! Membership, prefix, suffix and substring rules
//!
//! The argument is a single candidate or a list of them. A rule passes when
//! any candidate matches; its `not_` twin passes when none does.

use crate::error::{CheckError, CheckResult};
use crate::registry::RuleContext;
use crate::rule::{RuleArgument, Scalar};
use crate::value::{loosely_equals, text_of};
use serde_json::Value;
use std::borrow::Cow;

fn candidates<'a>(
    argument: &'a RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<Cow<'a, [Scalar]>> {
    let single = match argument {
        RuleArgument::List(items) => return Ok(Cow::Borrowed(items)),
        RuleArgument::Pair(a, b) => return Ok(Cow::Owned(vec![Scalar::Integer(*a), Scalar::Integer(*b)])),
        RuleArgument::Bool(b) => Scalar::Bool(*b),
        RuleArgument::Integer(i) => Scalar::Integer(*i),
        RuleArgument::Float(x) => Scalar::Float(*x),
        RuleArgument::String(s) => Scalar::String(s.clone()),
        RuleArgument::Format(_) => {
            return Err(CheckError::invalid_argument(
                ctx.rule(),
                "expected a candidate or a list of candidates, got format spec",
            ));
        }
    };
    Ok(Cow::Owned(vec![single]))
}

fn any_text_match(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
    test: fn(&str, &str) -> bool,
) -> CheckResult<bool> {
    let candidates = candidates(argument, ctx)?;
    let Some(text) = text_of(value) else {
        return Ok(false);
    };
    Ok(candidates
        .iter()
        .any(|candidate| test(&text, &candidate.to_string())))
}

pub(super) fn is_in(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    Ok(candidates(argument, ctx)?
        .iter()
        .any(|candidate| loosely_equals(value, candidate)))
}

pub(super) fn not_in(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    is_in(value, argument, ctx).map(|found| !found)
}

pub(super) fn start_with(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    any_text_match(value, argument, ctx, |text, prefix| text.starts_with(prefix))
}

pub(super) fn not_start_with(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    start_with(value, argument, ctx).map(|found| !found)
}

pub(super) fn end_with(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    any_text_match(value, argument, ctx, |text, suffix| text.ends_with(suffix))
}

pub(super) fn not_end_with(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    end_with(value, argument, ctx).map(|found| !found)
}

/// Substring test for text; element test for lists.
pub(super) fn contains(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    match value {
        Value::Array(items) => {
            let candidates = candidates(argument, ctx)?;
            Ok(items.iter().any(|item| {
                candidates
                    .iter()
                    .any(|candidate| loosely_equals(item, candidate))
            }))
        }
        _ => any_text_match(value, argument, ctx, |text, part| text.contains(part)),
    }
}

pub(super) fn not_contains(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    contains(value, argument, ctx).map(|found| !found)
}
