//! Built-in formats
//!
//! Every built-in except `anything`/`string` treats empty input as a match:
//! emptiness is the business of the `required` rule, not of a format.

pub mod numeric;
pub mod temporal;
pub mod text;
pub mod web;

use crate::resolver::BuiltinFormat;

/// Built-in format table, in registration order.
pub const ALL: &[(&str, BuiltinFormat)] = &[
    // Text
    ("anything", text::anything),
    ("string", text::anything),
    ("name", text::name),
    ("word", text::word),
    ("alphanumeric", text::alphanumeric),
    ("alpha", text::alpha),
    ("ascii", text::ascii),
    // Numbers
    ("numeric", numeric::numeric),
    ("integer", numeric::integer),
    ("natural", numeric::natural),
    ("double", numeric::double),
    ("float", numeric::double),
    ("monetary", numeric::monetary),
    ("price", numeric::monetary),
    ("tax", numeric::tax),
    // Dates
    ("date_ymd", temporal::date_ymd),
    ("date_mdy", temporal::date_mdy),
    ("date_dmy", temporal::date_dmy),
    ("date_ymd_dotted", temporal::date_ymd_dotted),
    ("date_mdy_dotted", temporal::date_mdy_dotted),
    ("date_dmy_dotted", temporal::date_dmy_dotted),
    ("date_ymd_dashed", temporal::date_ymd_dashed),
    ("date_mdy_dashed", temporal::date_mdy_dashed),
    ("date_dmy_dashed", temporal::date_dmy_dashed),
    ("date", temporal::date),
    ("time", temporal::time),
    ("longtime", temporal::long_time),
    ("datetime", temporal::date_time),
    ("longdatetime", temporal::long_date_time),
    ("datetime_ymd", temporal::date_time_ymd),
    ("datetime_mdy", temporal::date_time_mdy),
    ("datetime_dmy", temporal::date_time_dmy),
    ("longdatetime_ymd", temporal::long_date_time_ymd),
    ("longdatetime_mdy", temporal::long_date_time_mdy),
    ("longdatetime_dmy", temporal::long_date_time_dmy),
    // Web
    ("email", web::email),
    ("http", web::http),
    ("url", web::url),
    ("ip", web::ip),
    ("ipv4", web::ipv4),
    ("ipv6", web::ipv6),
];
