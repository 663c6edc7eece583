//! Prelude module for convenient imports.
//!
//! `use rulecheck::prelude::*;` brings in everything needed to declare
//! rule sets, run checks and read their results.
//!
//! # Examples
//!
//! ```rust
//! use rulecheck::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new();
//! let rules = RuleSet::new().rule("in", ["red", "green"]);
//! let problems = validator.check(&json!("blue"), &rules, None).unwrap();
//! assert_eq!(problems.len(), 1);
//! ```

// ============================================================================
// CHECKING
// ============================================================================

pub use crate::{
    CheckError, CheckResult, ProblemTree, StrippedTree, StructuralAccessor, Validator,
};

// ============================================================================
// RULES
// ============================================================================

pub use crate::{FieldRuleMap, FormatSpec, Label, Predicate, RuleArgument, RuleSet};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::formats::{FormatConfig, FormatMatcher};
pub use crate::{UnknownRulePolicy, ValidatorConfig};
