//! Core traits and types for import resolution

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{Imported, ImportObject};

/// Why an import path could not be resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportFailure {
    #[error("{0} doesn't look like a module path")]
    NotAModulePath(String),

    #[error("No module named '{0}'")]
    NoModule(String),

    #[error("Module \"{module}\" does not define a \"{attribute}\" attribute/class")]
    MissingAttribute { module: String, attribute: String },

    #[error("expected an import path string, found {0}")]
    NotAString(String),

    #[error("{0}")]
    Other(String),
}

/// Trait for import resolution strategies
///
/// Implementations:
/// - `RegistryImportResolver`: The process-wide registry (default)
/// - `MemoryImportResolver`: A private table, handy for tests
pub trait ImportResolver: Send + Sync {
    /// Human-readable name of this resolver
    fn name(&self) -> &str;

    /// Resolve a dotted path to an object
    fn resolve(&self, path: &str) -> Result<Imported, ImportFailure>;
}

/// Split `"a.b.C"` into `("a.b", "C")`
pub fn split_import_path(path: &str) -> Result<(&str, &str), ImportFailure> {
    match path.rsplit_once('.') {
        Some((module, attribute)) if !module.is_empty() && !attribute.is_empty() => {
            Ok((module, attribute))
        }
        _ => Err(ImportFailure::NotAModulePath(path.to_string())),
    }
}

/// Resolve `path` against a table of registered objects
///
/// A module exists when at least one registered path lives under it. The
/// reported missing module is the shortest prefix with nothing registered.
pub(crate) fn lookup(
    objects: &HashMap<String, ImportObject>,
    path: &str,
) -> Result<Imported, ImportFailure> {
    let (module, attribute) = split_import_path(path)?;

    if let Some(object) = objects.get(path) {
        return Ok(Imported::new(path, object.clone()));
    }

    let mut prefix_end = 0;
    for segment in module.split('.') {
        prefix_end += segment.len();
        let prefix = &module[..prefix_end];
        let scope = format!("{prefix}.");
        if !objects.keys().any(|registered| registered.starts_with(&scope)) {
            return Err(ImportFailure::NoModule(prefix.to_string()));
        }
        prefix_end += 1;
    }

    Err(ImportFailure::MissingAttribute {
        module: module.to_string(),
        attribute: attribute.to_string(),
    })
}
