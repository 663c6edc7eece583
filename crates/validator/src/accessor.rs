//! Reading objects as field mappings
//!
//! [`Validator::check_object`](crate::Validator::check_object) accepts
//! anything that can present itself as a mapping of field names to values.
//! Types that implement `serde::Serialize` need no implementation of their
//! own: use [`Validator::check_serialize`](crate::Validator::check_serialize).

use crate::value::as_field_mapping;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Presents an object as field name to value.
///
/// ```rust
/// use rulecheck::StructuralAccessor;
/// use serde_json::{Map, Value, json};
/// use std::borrow::Cow;
///
/// struct Account {
///     user: String,
///     age: u8,
/// }
///
/// impl StructuralAccessor for Account {
///     fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>> {
///         let mut fields = Map::new();
///         fields.insert("user".into(), json!(self.user));
///         fields.insert("age".into(), json!(self.age));
///         Cow::Owned(fields)
///     }
/// }
///
/// let account = Account { user: "bob".into(), age: 16 };
/// assert_eq!(account.to_field_mapping().get("age"), Some(&json!(16)));
/// ```
pub trait StructuralAccessor {
    /// Field values by name.
    fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>>;
}

impl StructuralAccessor for Map<String, Value> {
    fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>> {
        Cow::Borrowed(self)
    }
}

/// Lists are addressed by position (`"0"`, `"1"`, ...); other scalars
/// become `{"0": scalar}`.
impl StructuralAccessor for Value {
    fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>> {
        as_field_mapping(self)
    }
}

impl<S: std::hash::BuildHasher> StructuralAccessor for HashMap<String, Value, S> {
    fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>> {
        Cow::Owned(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl StructuralAccessor for BTreeMap<String, Value> {
    fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>> {
        Cow::Owned(self.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl<T: StructuralAccessor + ?Sized> StructuralAccessor for &T {
    fn to_field_mapping(&self) -> Cow<'_, Map<String, Value>> {
        (**self).to_field_mapping()
    }
}
