//! In-memory override provider

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use crate::types::SettingsMap;
use super::traits::OverrideProvider;

/// In-memory override store keyed by namespace
///
/// Hosts without a configuration store of their own can keep overrides here,
/// and tests use it to change overrides between accesses.
///
/// # Example
///
/// ```
/// use zero_settings::overrides::{MemoryOverrideProvider, OverrideProvider};
/// use serde_json::json;
///
/// let provider = MemoryOverrideProvider::new();
/// provider.set_value("APP", "DEBUG", json!(true));
/// assert_eq!(provider.get_overrides("APP")["DEBUG"], json!(true));
/// ```
#[derive(Debug, Default)]
pub struct MemoryOverrideProvider {
    namespaces: RwLock<HashMap<String, SettingsMap>>,
}

impl MemoryOverrideProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self {
            namespaces: RwLock::new(HashMap::new()),
        }
    }

    /// Create a provider with a single namespace populated
    pub fn with_namespace(key: impl Into<String>, overrides: SettingsMap) -> Self {
        let provider = Self::new();
        provider.set(key, overrides);
        provider
    }

    /// Replace all overrides of a namespace
    pub fn set(&self, key: impl Into<String>, overrides: SettingsMap) {
        self.namespaces.write().insert(key.into(), overrides);
    }

    /// Set one override inside a namespace, creating the namespace if needed
    pub fn set_value(&self, key: &str, name: impl Into<String>, value: Value) {
        self.namespaces
            .write()
            .entry(key.to_string())
            .or_default()
            .insert(name.into(), value);
    }

    /// Remove one override from a namespace
    pub fn unset_value(&self, key: &str, name: &str) -> Option<Value> {
        self.namespaces
            .write()
            .get_mut(key)
            .and_then(|overrides| overrides.remove(name))
    }

    /// Drop a whole namespace
    pub fn remove(&self, key: &str) -> Option<SettingsMap> {
        self.namespaces.write().remove(key)
    }

    /// Drop every namespace
    pub fn clear(&self) {
        self.namespaces.write().clear();
    }

    /// Number of namespaces with registered overrides
    pub fn len(&self) -> usize {
        self.namespaces.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OverrideProvider for MemoryOverrideProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn get_overrides(&self, key: &str) -> SettingsMap {
        self.namespaces.read().get(key).cloned().unwrap_or_default()
    }

    fn has_overrides(&self, key: &str) -> bool {
        self.namespaces
            .read()
            .get(key)
            .is_some_and(|overrides| !overrides.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> SettingsMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_memory_override_provider() {
        let provider = MemoryOverrideProvider::new();

        // Initially empty
        assert!(provider.is_empty());
        assert!(provider.get_overrides("APP").is_empty());
        assert!(!provider.has_overrides("APP"));

        provider.set("APP", map(json!({"KEY": "new_key"})));
        assert_eq!(provider.len(), 1);
        assert!(provider.has_overrides("APP"));
        assert_eq!(provider.get_overrides("APP")["KEY"], json!("new_key"));

        // Other namespaces stay untouched
        assert!(provider.get_overrides("OTHER").is_empty());

        provider.set_value("APP", "VALUE", json!(1));
        assert_eq!(provider.get_overrides("APP").len(), 2);

        assert_eq!(provider.unset_value("APP", "VALUE"), Some(json!(1)));
        assert_eq!(provider.unset_value("APP", "VALUE"), None);

        assert!(provider.remove("APP").is_some());
        assert!(provider.remove("APP").is_none());
        assert!(provider.is_empty());
    }

    #[test]
    fn test_returned_map_is_a_copy() {
        let provider = MemoryOverrideProvider::with_namespace("APP", map(json!({"KEY": 1})));

        let mut overrides = provider.get_overrides("APP");
        overrides.insert("KEY".to_string(), json!(2));

        assert_eq!(provider.get_overrides("APP")["KEY"], json!(1));
    }

    #[test]
    fn test_set_value_creates_namespace() {
        let provider = MemoryOverrideProvider::new();
        provider.set_value("APP", "KEY", json!("value"));
        assert!(provider.has_overrides("APP"));

        provider.clear();
        assert!(!provider.has_overrides("APP"));
    }
}
