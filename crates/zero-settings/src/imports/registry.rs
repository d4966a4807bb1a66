//! Process-wide import registry

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::types::{Imported, ImportObject};
use super::traits::{lookup, ImportFailure, ImportResolver};

/// Global table of importable objects, keyed by dotted path
static REGISTRY: Lazy<RwLock<HashMap<String, ImportObject>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register an object under a dotted path
///
/// Registering a path twice replaces the earlier object.
///
/// # Example
///
/// ```
/// use zero_settings::imports::{register_import_value, import_string};
///
/// fn audit() -> &'static str { "audit" }
///
/// register_import_value("docs_example.handlers.audit", audit as fn() -> &'static str);
/// let imported = import_string("docs_example.handlers.audit").unwrap();
/// let handler = imported.downcast_ref::<fn() -> &'static str>().unwrap();
/// assert_eq!(handler(), "audit");
/// ```
pub fn register_import(path: &str, object: ImportObject) {
    REGISTRY.write().insert(path.to_string(), object);
}

/// Register a value under a dotted path, wrapping it in an `Arc`
pub fn register_import_value<T: Any + Send + Sync>(path: &str, value: T) {
    register_import(path, Arc::new(value));
}

/// Unregister a path (mainly for testing)
pub fn unregister_import(path: &str) -> bool {
    REGISTRY.write().remove(path).is_some()
}

/// Check if a path is registered
pub fn has_import(path: &str) -> bool {
    REGISTRY.read().contains_key(path)
}

/// List all registered paths, sorted
pub fn list_imports() -> Vec<String> {
    let mut paths: Vec<String> = REGISTRY.read().keys().cloned().collect();
    paths.sort();
    paths
}

/// Resolve a dotted path against the global registry
pub fn import_string(path: &str) -> Result<Imported, ImportFailure> {
    lookup(&REGISTRY.read(), path)
}

/// Resolver backed by the process-wide registry
///
/// This is what a resolver uses unless another `ImportResolver` is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryImportResolver;

impl RegistryImportResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ImportResolver for RegistryImportResolver {
    fn name(&self) -> &str {
        "registry"
    }

    fn resolve(&self, path: &str) -> Result<Imported, ImportFailure> {
        import_string(path)
    }
}
