//! # rulecheck
//!
//! Declarative value checking: rule sets are plain data, failures come back
//! as a tree of rendered, localizable messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulecheck::prelude::*;
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator.set_message(
//!     "length_range",
//!     "{label} must have from {min_length} to {max_length} characters.",
//! );
//!
//! let fields = FieldRuleMap::new()
//!     .field("name", RuleSet::new().rule("required", true).rule("length_range", [5, 60]))
//!     .field("age", RuleSet::new().rule("min_value", 18));
//!
//! let problems = validator
//!     .check_object(&json!({"name": "Bob", "age": 21}), &fields)
//!     .unwrap();
//! assert_eq!(
//!     serde_json::to_value(&problems).unwrap(),
//!     json!({"name": {"length_range": "name must have from 5 to 60 characters."}})
//! );
//! ```
//!
//! ## Rule Sets From Data
//!
//! Rule sets decode from the same JSON shape they serialize to, so they
//! can live in configuration files:
//!
//! ```rust
//! use rulecheck::{FieldRuleMap, Validator};
//! use serde_json::json;
//!
//! let fields: FieldRuleMap = serde_json::from_value(json!({
//!     "birthday": {"format": {"en": "date_mdy", "pt": "date_dmy"}, "label": "Birthday"},
//!     "address": {"with": {"zip": {"required": true}}}
//! }))
//! .unwrap();
//!
//! let validator = Validator::with_locale("pt");
//! let problems = validator
//!     .check_object(&json!({"birthday": "31/12/1990", "address": {}}), &fields)
//!     .unwrap();
//! assert_eq!(problems.lookup(&["address", "zip", "required"]), Some(""));
//! assert!(problems.field("birthday").is_none());
//! ```
//!
//! ## Built-in Rules
//!
//! - **Presence**: `required`
//! - **Length**: `min_length`, `max_length`, `length_range`
//! - **Numeric**: `min_value`, `max_value`, `value_range`
//! - **Count**: `min_count`, `max_count`, `count_range`
//! - **Candidates**: `in`, `not_in`, `start_with`, `not_start_with`,
//!   `end_with`, `not_end_with`, `contains`, `not_contains`
//! - **Text**: `regex`, `format`
//!
//! Formats live in [`formats`], re-exported from `rulecheck-formats`.

mod accessor;
mod checker;
mod config;
mod error;
pub mod message;
pub mod prelude;
mod problems;
mod registry;
mod rule;
mod rules;
pub mod value;

pub use rulecheck_formats as formats;

pub use accessor::StructuralAccessor;
pub use checker::Validator;
pub use config::{DEFAULT_LOCALE, UnknownRulePolicy, ValidatorConfig};
pub use error::{CheckError, CheckResult};
pub use problems::{ProblemTree, StrippedTree};
pub use registry::{BuiltinRule, DEFAULT_REGEX_CACHE_CAPACITY, Predicate, RuleContext, RuleRegistry};
pub use rule::{FORMAT, FieldRuleMap, FormatSpec, LABEL, Label, RuleArgument, RuleSet, Scalar, WITH, is_meta_key};
