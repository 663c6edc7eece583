//! Instance-scoped registry of named formats

use crate::builtins;
use crate::config::FormatConfig;
use crate::resolver::{Builtin, FormatMatcher, FormatResolver, ResolvedFormat};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of all formats known to one validator.
///
/// Seeded with the built-in formats; user formats registered under an
/// existing name replace it.
pub struct FormatRegistry {
    formats: IndexMap<String, Arc<dyn FormatMatcher>>,
    config: FormatConfig,
}

impl FormatRegistry {
    /// Creates a registry with the built-in formats and default settings.
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Creates a registry with the built-in formats and the given settings.
    pub fn with_config(config: FormatConfig) -> Self {
        let mut registry = Self {
            formats: IndexMap::new(),
            config,
        };
        registry.register_builtins();
        registry
    }

    /// Registers a format, replacing any format of the same name.
    pub fn register(&mut self, name: impl Into<String>, matcher: impl FormatMatcher + 'static) {
        let name = name.into();
        debug!(format = %name, "registering format");
        self.formats.insert(name, Arc::new(matcher));
    }

    /// Removes a format. Built-ins can be removed too.
    ///
    /// Returns `true` if the format existed.
    pub fn unregister(&mut self, name: &str) -> bool {
        debug!(format = %name, "unregistering format");
        self.formats.shift_remove(name).is_some()
    }

    /// Check if a format exists
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Drops user formats and restores every built-in.
    pub fn reset(&mut self) {
        self.formats.clear();
        self.register_builtins();
    }

    /// Active settings.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Replaces the settings used by built-in formats.
    pub fn set_config(&mut self, config: FormatConfig) {
        self.config = config;
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Returns true if no format is registered.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    fn register_builtins(&mut self) {
        for (name, func) in builtins::ALL {
            self.formats.insert((*name).to_string(), Arc::new(Builtin(*func)));
        }
    }
}

impl FormatResolver for FormatRegistry {
    fn resolve(&self, name: &str) -> Option<ResolvedFormat<'_>> {
        self.formats
            .get_key_value(name)
            .map(|(key, matcher)| ResolvedFormat::new(key, matcher.as_ref(), &self.config))
    }

    fn names(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.formats.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}
