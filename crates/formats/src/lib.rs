//! # rulecheck-formats
//!
//! Named value-shape checks used by the `format` rule of `rulecheck`.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulecheck_formats::{FormatRegistry, FormatResolver};
//!
//! let mut formats = FormatRegistry::new();
//! formats.register("zip", |s: &str| s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit()));
//!
//! assert!(formats.resolve("numeric").unwrap().matches("42", None));
//! assert!(formats.resolve("zip").unwrap().matches("90210", None));
//! assert!(formats.resolve("nope").is_none());
//! ```
//!
//! ## Built-in Formats
//!
//! - **Text**: `anything`, `string`, `name`, `word`, `alphanumeric`, `alpha`, `ascii`
//! - **Numbers**: `numeric`, `integer`, `natural`, `double`, `float`, `monetary`,
//!   `price`, `tax`
//! - **Dates**: `date_ymd`, `date_mdy`, `date_dmy` and their `_dotted` / `_dashed`
//!   variants, `date`, `time`, `longtime`, `datetime`, `longdatetime`
//! - **Web**: `email`, `http`, `url`, `ip`, `ipv4`, `ipv6`
//!
//! Date and number formats read their separators and patterns from
//! [`FormatConfig`].

pub mod builtins;
mod config;
mod registry;
mod resolver;

pub use config::FormatConfig;
pub use registry::FormatRegistry;
pub use resolver::{
    Builtin, BuiltinFormat, FormatContext, FormatMatcher, FormatResolver, ResolvedFormat,
};
