//! `format`: dispatch to the format resolver

use crate::error::{CheckError, CheckResult};
use crate::registry::RuleContext;
use crate::rule::RuleArgument;
use crate::value::text_of;
use serde_json::Value;

/// Matches the value's text against a named format.
///
/// The argument is a format name, a `{name, separator}` spec, or a
/// locale-keyed map read under the active locale. A name or locale nobody
/// registered is an error rather than a silent pass.
pub(super) fn format(
    value: &Value,
    argument: &RuleArgument,
    ctx: &RuleContext<'_>,
) -> CheckResult<bool> {
    let (name, separator) = match argument {
        RuleArgument::String(name) => (name.as_str(), None),
        RuleArgument::Format(spec) => {
            let name = spec
                .name_for(ctx.locale())
                .ok_or_else(|| CheckError::format_locale(ctx.locale()))?;
            (name, spec.separator())
        }
        other => {
            return Err(CheckError::invalid_argument(
                ctx.rule(),
                format!("expected a format name or spec, got {}", other.kind()),
            ));
        }
    };

    let format = ctx
        .formats()
        .resolve(name)
        .ok_or_else(|| CheckError::format_not_found(name))?;
    Ok(text_of(value).is_some_and(|text| format.matches(&text, separator)))
}

/// Format name an argument refers to under `locale`, for messages.
pub(crate) fn format_name<'a>(argument: &'a RuleArgument, locale: &str) -> Option<&'a str> {
    match argument {
        RuleArgument::String(name) => Some(name),
        RuleArgument::Format(spec) => spec.name_for(locale),
        _ => None,
    }
}
