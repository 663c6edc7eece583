//! `required`

use crate::error::CheckResult;
use crate::registry::RuleContext;
use crate::rule::RuleArgument;
use crate::value::length_of;
use serde_json::Value;

/// Fails when the flag is set and the value is empty.
///
/// The flag is `false` or `0` to switch the rule off; any other argument
/// keeps it on. Empty lists and mappings count as empty.
pub(super) fn required(
    value: &Value,
    argument: &RuleArgument,
    _ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let enforced = match argument {
        RuleArgument::Bool(flag) => *flag,
        RuleArgument::Integer(flag) => *flag != 0,
        _ => true,
    };
    Ok(!enforced || length_of(value) > 0)
}
