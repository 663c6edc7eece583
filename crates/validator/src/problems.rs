//! Checking results and their transformations
//!
//! A [`ProblemTree`] holds only what failed. A single value yields
//! `{rule: message}`; a structure yields `{field: ProblemTree}`:
//!
//! ```json
//! { "name": { "length_range": "name must have from 5 to 60 characters." },
//!   "bar":  { "x": { "min_value": "" } } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// PROBLEM TREE
// ============================================================================

/// Failed rules of a value, or failed fields of a structure.
///
/// An empty JSON object carries no shape, so it deserializes as an empty
/// [`Rules`](Self::Rules) while [`Default`] is an empty
/// [`Fields`](Self::Fields). Compare empty results with
/// [`is_empty`](Self::is_empty) rather than `==`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemTree {
    /// Rule name to rendered message.
    Rules(IndexMap<String, String>),
    /// Field name to the problems of that field.
    Fields(IndexMap<String, ProblemTree>),
}

impl ProblemTree {
    /// Returns true if nothing failed.
    pub fn is_empty(&self) -> bool {
        match self {
            ProblemTree::Rules(rules) => rules.is_empty(),
            ProblemTree::Fields(fields) => fields.is_empty(),
        }
    }

    /// Number of failed rules or fields at this level.
    pub fn len(&self) -> usize {
        match self {
            ProblemTree::Rules(rules) => rules.len(),
            ProblemTree::Fields(fields) => fields.len(),
        }
    }

    /// Failed rules, for a single-value result.
    pub fn rules(&self) -> Option<&IndexMap<String, String>> {
        match self {
            ProblemTree::Rules(rules) => Some(rules),
            ProblemTree::Fields(_) => None,
        }
    }

    /// Failed fields, for a structure result.
    pub fn fields(&self) -> Option<&IndexMap<String, ProblemTree>> {
        match self {
            ProblemTree::Fields(fields) => Some(fields),
            ProblemTree::Rules(_) => None,
        }
    }

    /// Message of a failed rule.
    pub fn message(&self, rule: &str) -> Option<&str> {
        self.rules()?.get(rule).map(String::as_str)
    }

    /// Problems of a failed field.
    pub fn field(&self, name: &str) -> Option<&ProblemTree> {
        self.fields()?.get(name)
    }

    /// Message found by walking field names and ending with a rule name.
    ///
    /// `tree.lookup(&["bar", "x", "min_value"])`
    pub fn lookup(&self, path: &[&str]) -> Option<&str> {
        match path {
            [] => None,
            [rule] => self.message(rule),
            [field, rest @ ..] => self.field(field)?.lookup(rest),
        }
    }

    /// Replaces every `{rule: message}` level with its messages, in rule
    /// order. Field levels keep their keys.
    pub fn strip_rule_names(&self) -> StrippedTree {
        match self {
            ProblemTree::Rules(rules) => StrippedTree::Messages(rules.values().cloned().collect()),
            ProblemTree::Fields(fields) => StrippedTree::Fields(
                fields
                    .iter()
                    .map(|(name, tree)| (name.clone(), tree.strip_rule_names()))
                    .collect(),
            ),
        }
    }

    /// Every message, depth first in key order.
    pub fn flatten_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        self.collect_messages(&mut messages);
        messages
    }

    /// Every message once, in order of first appearance.
    pub fn unique_messages(&self) -> Vec<String> {
        let mut messages = self.flatten_messages();
        let mut seen = std::collections::HashSet::new();
        messages.retain(|message| seen.insert(message.clone()));
        messages
    }

    fn collect_messages(&self, out: &mut Vec<String>) {
        match self {
            ProblemTree::Rules(rules) => out.extend(rules.values().cloned()),
            ProblemTree::Fields(fields) => {
                for tree in fields.values() {
                    tree.collect_messages(out);
                }
            }
        }
    }
}

impl Default for ProblemTree {
    fn default() -> Self {
        ProblemTree::Fields(IndexMap::new())
    }
}

// ============================================================================
// STRIPPED TREE
// ============================================================================

/// A [`ProblemTree`] without rule names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrippedTree {
    /// Messages of one value, in rule order.
    Messages(Vec<String>),
    /// Field name to the stripped problems of that field.
    Fields(IndexMap<String, StrippedTree>),
}

impl StrippedTree {
    /// Puts rule names back using the tree this one was stripped from.
    ///
    /// Message `i` of a level gets the `i`-th rule name of the same level
    /// in `original`. Returns `None` when the shapes disagree.
    pub fn restore_rule_names(&self, original: &ProblemTree) -> Option<ProblemTree> {
        match (self, original) {
            (StrippedTree::Messages(messages), ProblemTree::Rules(rules)) => {
                if messages.len() != rules.len() {
                    return None;
                }
                Some(ProblemTree::Rules(
                    rules.keys().cloned().zip(messages.iter().cloned()).collect(),
                ))
            }
            (StrippedTree::Fields(fields), ProblemTree::Fields(originals)) => {
                if fields.len() != originals.len() {
                    return None;
                }
                fields
                    .iter()
                    .map(|(name, stripped)| {
                        let tree = stripped.restore_rule_names(originals.get(name)?)?;
                        Some((name.clone(), tree))
                    })
                    .collect::<Option<IndexMap<_, _>>>()
                    .map(ProblemTree::Fields)
            }
            _ => None,
        }
    }
}
