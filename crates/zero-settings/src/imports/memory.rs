//! Import resolver with a private table

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::{Imported, ImportObject};
use super::traits::{lookup, ImportFailure, ImportResolver};

/// Import resolver that only sees its own registrations
///
/// Keeps tests and embedded hosts isolated from the global registry.
///
/// # Example
///
/// ```
/// use zero_settings::imports::{ImportResolver, MemoryImportResolver};
///
/// let resolver = MemoryImportResolver::new().with("app.limits.MAX", 10_u32);
/// let imported = resolver.resolve("app.limits.MAX").unwrap();
/// assert_eq!(imported.downcast_ref::<u32>(), Some(&10));
/// ```
#[derive(Default)]
pub struct MemoryImportResolver {
    objects: RwLock<HashMap<String, ImportObject>>,
}

impl MemoryImportResolver {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Builder-style registration
    pub fn with<T: Any + Send + Sync>(self, path: &str, value: T) -> Self {
        self.insert(path, Arc::new(value));
        self
    }

    /// Register an object under a dotted path
    pub fn insert(&self, path: &str, object: ImportObject) {
        self.objects.write().insert(path.to_string(), object);
    }

    pub fn remove(&self, path: &str) -> bool {
        self.objects.write().remove(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for MemoryImportResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut paths: Vec<String> = self.objects.read().keys().cloned().collect();
        paths.sort();
        f.debug_struct("MemoryImportResolver")
            .field("paths", &paths)
            .finish()
    }
}

impl ImportResolver for MemoryImportResolver {
    fn name(&self) -> &str {
        "memory"
    }

    fn resolve(&self, path: &str) -> Result<Imported, ImportFailure> {
        lookup(&self.objects.read(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greet() -> &'static str {
        "hello"
    }

    #[test]
    fn test_memory_resolver() {
        let resolver = MemoryImportResolver::new()
            .with("app.greet", greet as fn() -> &'static str);
        assert_eq!(resolver.len(), 1);

        let imported = resolver.resolve("app.greet").unwrap();
        let greet_fn = imported.downcast_ref::<fn() -> &'static str>().unwrap();
        assert_eq!(greet_fn(), "hello");

        assert!(resolver.remove("app.greet"));
        assert!(resolver.is_empty());
        assert_eq!(
            resolver.resolve("app.greet").unwrap_err(),
            ImportFailure::NoModule("app".to_string())
        );
    }

    #[test]
    fn test_isolated_from_global_registry() {
        crate::imports::register_import_value("memory_tests.isolation.Value", 1_u8);

        let resolver = MemoryImportResolver::new();
        assert!(resolver.resolve("memory_tests.isolation.Value").is_err());

        crate::imports::unregister_import("memory_tests.isolation.Value");
    }
}
