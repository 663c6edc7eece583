//! Declarative rule sets
//!
//! A [`RuleSet`] maps rule names to [`RuleArgument`]s for one value and may
//! carry a [`Label`] and a nested [`FieldRuleMap`] (`with`). Both decode
//! from the JSON shape used in configuration files:
//!
//! ```json
//! {
//!   "name": { "required": true, "length_range": [2, 60], "label": {"en": "Name", "pt": "Nome"} },
//!   "address": { "with": { "zip": { "format": "natural" } } }
//! }
//! ```

mod argument;
mod label;
mod set;

pub use argument::{FormatSpec, RuleArgument, Scalar};
pub use label::Label;
pub use set::{FORMAT, FieldRuleMap, LABEL, RuleSet, WITH, is_meta_key};
