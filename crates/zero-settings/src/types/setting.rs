//! Resolved setting values

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Type-erased object an import path resolves to
pub type ImportObject = Arc<dyn Any + Send + Sync>;

/// An object obtained by resolving an import path
///
/// Cloning is cheap and keeps pointing at the same underlying object, so two
/// resolutions of the same registered path compare equal.
#[derive(Clone)]
pub struct Imported {
    path: String,
    object: ImportObject,
}

impl Imported {
    pub fn new(path: impl Into<String>, object: ImportObject) -> Self {
        Self {
            path: path.into(),
            object,
        }
    }

    /// The dotted path this object was resolved from
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The shared object itself
    pub fn object(&self) -> &ImportObject {
        &self.object
    }

    /// Borrow the object as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.object).downcast_ref::<T>()
    }

    /// Check whether the object is of type `T`
    pub fn is<T: Any>(&self) -> bool {
        (*self.object).is::<T>()
    }
}

impl fmt::Debug for Imported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Imported")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Imported {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && Arc::ptr_eq(&self.object, &other.object)
    }
}

/// The effective value of a setting after resolution
///
/// Plain settings always resolve to `Setting::Value`. Import settings resolve
/// to `Import` for a single path, `ImportList` for a list of paths, and pass
/// anything else (including `null`) through as `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    Value(Value),
    Import(Imported),
    ImportList(Vec<Imported>),
}

impl Setting {
    /// Borrow the plain value, if this is not an import
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Setting::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Take the plain value, if this is not an import
    pub fn into_value(self) -> Option<Value> {
        match self {
            Setting::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_import(&self) -> Option<&Imported> {
        match self {
            Setting::Import(imported) => Some(imported),
            _ => None,
        }
    }

    pub fn as_import_list(&self) -> Option<&[Imported]> {
        match self {
            Setting::ImportList(list) => Some(list),
            _ => None,
        }
    }

    /// True for a plain `null` value
    pub fn is_null(&self) -> bool {
        matches!(self, Setting::Value(Value::Null))
    }
}

impl From<Value> for Setting {
    fn from(value: Value) -> Self {
        Setting::Value(value)
    }
}

impl From<Imported> for Setting {
    fn from(imported: Imported) -> Self {
        Setting::Import(imported)
    }
}

impl PartialEq<Value> for Setting {
    fn eq(&self, other: &Value) -> bool {
        self.as_value() == Some(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Marker;

    #[test]
    fn test_imported_downcast() {
        let imported = Imported::new("pkg.Marker", Arc::new(Marker));
        assert_eq!(imported.path(), "pkg.Marker");
        assert!(imported.is::<Marker>());
        assert!(imported.downcast_ref::<Marker>().is_some());
        assert!(imported.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_imported_equality_is_identity() {
        let object: ImportObject = Arc::new(Marker);
        let a = Imported::new("pkg.Marker", object.clone());
        let b = Imported::new("pkg.Marker", object);
        let c = Imported::new("pkg.Marker", Arc::new(Marker));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_setting_accessors() {
        let value = Setting::from(json!(["a", "b"]));
        assert_eq!(value, json!(["a", "b"]));
        assert!(value.as_import().is_none());
        assert!(!value.is_null());
        assert!(Setting::Value(Value::Null).is_null());

        let import = Setting::from(Imported::new("pkg.Marker", Arc::new(Marker)));
        assert!(import.as_value().is_none());
        assert_eq!(import.as_import().map(Imported::path), Some("pkg.Marker"));
        assert!(import.clone().into_value().is_none());

        let list = Setting::ImportList(vec![Imported::new("pkg.Marker", Arc::new(Marker))]);
        assert_eq!(list.as_import_list().map(<[Imported]>::len), Some(1));
    }
}
