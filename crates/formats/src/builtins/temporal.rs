//! Date and time formats
//!
//! The `date_*` family checks a fixed field order and separator, then
//! verifies that the day exists in that month (leap years included). The
//! remaining formats parse with the `chrono` patterns from
//! [`FormatConfig`](crate::FormatConfig).

use crate::resolver::FormatContext;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Year,
    Month,
    Day,
}

const YMD: [Part; 3] = [Part::Year, Part::Month, Part::Day];
const MDY: [Part; 3] = [Part::Month, Part::Day, Part::Year];
const DMY: [Part; 3] = [Part::Day, Part::Month, Part::Year];

impl Part {
    fn max_digits(self) -> usize {
        match self {
            Part::Year => 4,
            Part::Month | Part::Day => 2,
        }
    }
}

const SHORT_TIME: &str = "%H:%M";
const LONG_TIME: &str = "%H:%M:%S";

fn calendar_date(text: &str, order: [Part; 3], separator: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    if separator.is_empty() {
        return false;
    }

    let pieces: Vec<&str> = text.split(separator).collect();
    if pieces.len() != 3 {
        return false;
    }

    let (mut year, mut month, mut day) = (0_u32, 0_u32, 0_u32);
    for (piece, part) in pieces.iter().zip(order) {
        if piece.is_empty()
            || piece.len() > part.max_digits()
            || !piece.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
        let Ok(number) = piece.parse::<u32>() else {
            return false;
        };
        match part {
            Part::Year => year = number,
            Part::Month => month = number,
            Part::Day => day = number,
        }
    }

    year >= 1 && NaiveDate::from_ymd_opt(year as i32, month, day).is_some()
}

fn separator_or<'a>(ctx: &FormatContext<'a>, default: &'a str) -> &'a str {
    ctx.separator.unwrap_or(default)
}

/// `yyyy/mm/dd`
pub fn date_ymd(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, YMD, separator_or(ctx, "/"))
}

/// `mm/dd/yyyy`
pub fn date_mdy(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, MDY, separator_or(ctx, "/"))
}

/// `dd/mm/yyyy`
pub fn date_dmy(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, DMY, separator_or(ctx, "/"))
}

/// `yyyy.mm.dd`
pub fn date_ymd_dotted(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, YMD, separator_or(ctx, "."))
}

/// `mm.dd.yyyy`
pub fn date_mdy_dotted(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, MDY, separator_or(ctx, "."))
}

/// `dd.mm.yyyy`
pub fn date_dmy_dotted(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, DMY, separator_or(ctx, "."))
}

/// `yyyy-mm-dd`
pub fn date_ymd_dashed(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, YMD, separator_or(ctx, "-"))
}

/// `mm-dd-yyyy`
pub fn date_mdy_dashed(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, MDY, separator_or(ctx, "-"))
}

/// `dd-mm-yyyy`
pub fn date_dmy_dashed(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date(text, DMY, separator_or(ctx, "-"))
}

fn calendar_date_time(
    text: &str,
    order: [Part; 3],
    ctx: &FormatContext<'_>,
    time_format: &str,
) -> bool {
    if text.is_empty() {
        return true;
    }
    let Some((date, time)) = text.split_once(' ') else {
        return false;
    };
    !date.is_empty()
        && calendar_date(date, order, separator_or(ctx, "/"))
        && NaiveTime::parse_from_str(time, time_format).is_ok()
}

/// `yyyy/mm/dd hh:mm`
pub fn date_time_ymd(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date_time(text, YMD, ctx, SHORT_TIME)
}

/// `mm/dd/yyyy hh:mm`
pub fn date_time_mdy(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date_time(text, MDY, ctx, SHORT_TIME)
}

/// `dd/mm/yyyy hh:mm`
pub fn date_time_dmy(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date_time(text, DMY, ctx, SHORT_TIME)
}

/// `yyyy/mm/dd hh:mm:ss`
pub fn long_date_time_ymd(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date_time(text, YMD, ctx, LONG_TIME)
}

/// `mm/dd/yyyy hh:mm:ss`
pub fn long_date_time_mdy(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date_time(text, MDY, ctx, LONG_TIME)
}

/// `dd/mm/yyyy hh:mm:ss`
pub fn long_date_time_dmy(text: &str, ctx: &FormatContext<'_>) -> bool {
    calendar_date_time(text, DMY, ctx, LONG_TIME)
}

/// Date in the configured `date_format`.
pub fn date(text: &str, ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || NaiveDate::parse_from_str(text, &ctx.config.date_format).is_ok()
}

/// Time in the configured `time_format`.
pub fn time(text: &str, ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || NaiveTime::parse_from_str(text, &ctx.config.time_format).is_ok()
}

/// Time in the configured `long_time_format`.
pub fn long_time(text: &str, ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || NaiveTime::parse_from_str(text, &ctx.config.long_time_format).is_ok()
}

/// Date and time in the configured `date_time_format`.
pub fn date_time(text: &str, ctx: &FormatContext<'_>) -> bool {
    text.is_empty() || NaiveDateTime::parse_from_str(text, &ctx.config.date_time_format).is_ok()
}

/// Date and time in the configured `long_date_time_format`.
pub fn long_date_time(text: &str, ctx: &FormatContext<'_>) -> bool {
    text.is_empty()
        || NaiveDateTime::parse_from_str(text, &ctx.config.long_date_time_format).is_ok()
}
