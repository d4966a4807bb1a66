//! Lazy, cached settings resolution
//!
//! A [`SettingsResolver`] answers "what is the effective value of setting X"
//! for one namespace. Values come from the override provider, with local
//! overrides merged on top, and fall back to the library defaults. Every
//! lookup first rejects removed names and, in strict mode, names without a
//! default.
//!
//! With caching on, the merged overrides are captured once as a snapshot and
//! each resolved value is memoized until [`SettingsResolver::clear_cache`] is
//! called, directly or through a change notification.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::imports::{ImportFailure, ImportResolver};
use crate::logging::{Logger, SharedLogger};
use crate::overrides::OverrideProvider;
use crate::types::{Imported, ResolverOptions, Setting, SettingsMap};
use crate::{log_debug, log_warn};
use super::builder::SettingsBuilder;
use super::error::{SettingsError, SettingsResult};

/// Memoized state, guarded by one lock
#[derive(Debug, Default)]
pub(super) struct CacheState {
    values: HashMap<String, Setting>,
    snapshot: Option<Arc<SettingsMap>>,
}

/// Settings facade for one namespace
pub struct SettingsResolver {
    pub(super) key: String,
    pub(super) defaults: SettingsMap,
    pub(super) local_overrides: SettingsMap,
    pub(super) import_names: Vec<String>,
    pub(super) removed_names: HashMap<String, String>,
    pub(super) docs_url: String,
    pub(super) options: ResolverOptions,
    pub(super) provider: Arc<dyn OverrideProvider>,
    pub(super) imports: Arc<dyn ImportResolver>,
    pub(super) logger: SharedLogger,
    pub(super) cache: Mutex<CacheState>,
}

impl SettingsResolver {
    /// Start building a resolver for `key`
    pub fn builder(key: impl Into<String>, defaults: SettingsMap) -> SettingsBuilder {
        SettingsBuilder::new(key, defaults)
    }

    /// Resolver with default flags reading overrides from `provider`
    pub fn new(
        key: impl Into<String>,
        defaults: SettingsMap,
        provider: Arc<dyn OverrideProvider>,
    ) -> SettingsResult<Self> {
        SettingsBuilder::new(key, defaults).provider(provider).build()
    }

    /// Namespace key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn defaults(&self) -> &SettingsMap {
        &self.defaults
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    pub fn docs_url(&self) -> &str {
        &self.docs_url
    }

    pub fn has_default(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    pub fn is_removed(&self, name: &str) -> bool {
        self.removed_names.contains_key(name)
    }

    pub fn is_import(&self, name: &str) -> bool {
        self.import_names.iter().any(|import| import == name)
    }

    /// Check whether `name` currently has a memoized value
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.lock().values.contains_key(name)
    }

    /// Names with a memoized value, sorted
    pub fn cached_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.cache.lock().values.keys().cloned().collect();
        names.sort();
        names
    }

    /// Overrides currently in effect for this namespace
    ///
    /// Provider overrides with local overrides merged on top. With caching on,
    /// the first call captures a snapshot that later calls return unchanged
    /// until the cache is cleared.
    pub fn overrides(&self) -> Arc<SettingsMap> {
        if !self.options.use_cache {
            return Arc::new(self.merged_overrides());
        }

        if let Some(snapshot) = self.cache.lock().snapshot.clone() {
            return snapshot;
        }

        let merged = Arc::new(self.merged_overrides());
        self.cache
            .lock()
            .snapshot
            .get_or_insert_with(|| merged)
            .clone()
    }

    fn merged_overrides(&self) -> SettingsMap {
        let mut merged = self.provider.get_overrides(&self.key);
        for (name, value) in &self.local_overrides {
            merged.insert(name.clone(), value.clone());
        }
        log_debug!(
            self.logger,
            "Loaded {} override(s) for '{}' from {} provider",
            merged.len(),
            self.key,
            self.provider.name()
        );
        merged
    }

    /// Resolve a setting
    ///
    /// Fails for removed names, for names without a default in strict mode,
    /// for names found nowhere, and for import paths that do not resolve.
    pub fn get(&self, name: &str) -> SettingsResult<Setting> {
        if self.options.use_cache {
            if let Some(value) = self.cache.lock().values.get(name) {
                return Ok(value.clone());
            }
        }

        self.check_removed(name)?;
        self.check_default_exists(name)?;

        let raw = self.raw_value(name)?;
        let value = if self.is_import(name) {
            self.perform_import(name, raw)?
        } else {
            Setting::Value(raw)
        };

        if self.options.use_cache {
            log_debug!(self.logger, "Caching '{}.{}'", self.key, name);
            self.cache.lock().values.insert(name.to_string(), value.clone());
        }
        Ok(value)
    }

    /// Resolve a plain setting and deserialize it into `T`
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> SettingsResult<T> {
        match self.get(name)? {
            Setting::Value(value) => serde_json::from_value(value).map_err(|e| SettingsError::Type {
                key: self.key.clone(),
                name: name.to_string(),
                message: e.to_string(),
            }),
            Setting::Import(_) | Setting::ImportList(_) => Err(SettingsError::Type {
                key: self.key.clone(),
                name: name.to_string(),
                message: "resolved to an imported object, not a plain value".to_string(),
            }),
        }
    }

    /// Forget memoized state
    ///
    /// `None` forgets every memoized value and the override snapshot. A name
    /// forgets only that value; the snapshot is kept.
    pub fn clear_cache(&self, name: Option<&str>) {
        let mut cache = self.cache.lock();
        match name {
            None => {
                cache.values.clear();
                cache.snapshot = None;
                log_debug!(self.logger, "Cleared all cached settings for '{}'", self.key);
            }
            Some(name) => {
                if cache.values.remove(name).is_some() {
                    log_debug!(self.logger, "Cleared cached '{}.{}'", self.key, name);
                }
            }
        }
    }

    /// Value from the overrides, falling back to the defaults
    fn raw_value(&self, name: &str) -> SettingsResult<Value> {
        if let Some(value) = self.overrides().get(name) {
            return Ok(value.clone());
        }
        self.defaults
            .get(name)
            .cloned()
            .ok_or_else(|| self.invalid_setting(name))
    }

    fn check_removed(&self, name: &str) -> SettingsResult<()> {
        let Some(message) = self.removed_names.get(name) else {
            return Ok(());
        };

        let message = if message.is_empty() {
            self.default_removed_message(name)
        } else {
            message.clone()
        };
        log_warn!(self.logger, "Deprecated setting accessed: {}", message);

        Err(SettingsError::Removed {
            key: self.key.clone(),
            name: name.to_string(),
            message,
        })
    }

    fn default_removed_message(&self, name: &str) -> String {
        let mut message = format!("The '{}.{}' setting has been removed.", self.key, name);
        if !self.docs_url.is_empty() {
            message.push_str(&format!(
                " Please refer to '{}' for available settings.",
                self.docs_url
            ));
        }
        message
    }

    fn check_default_exists(&self, name: &str) -> SettingsResult<()> {
        if self.options.strict_defaults && !self.has_default(name) {
            return Err(self.invalid_setting(name));
        }
        Ok(())
    }

    fn invalid_setting(&self, name: &str) -> SettingsError {
        SettingsError::InvalidSetting {
            key: self.key.clone(),
            name: name.to_string(),
        }
    }

    fn perform_import(&self, name: &str, value: Value) -> SettingsResult<Setting> {
        match value {
            Value::String(path) => self.import_path(name, &path).map(Setting::Import),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(path) => self.import_path(name, path),
                    other => Err(SettingsError::Import {
                        path: other.to_string(),
                        key: self.key.clone(),
                        name: name.to_string(),
                        cause: ImportFailure::NotAString(json_type(other).to_string()),
                    }),
                })
                .collect::<SettingsResult<Vec<_>>>()
                .map(Setting::ImportList),
            // null and non-path values pass through
            other => Ok(Setting::Value(other)),
        }
    }

    fn import_path(&self, name: &str, path: &str) -> SettingsResult<Imported> {
        self.imports.resolve(path).map_err(|cause| SettingsError::Import {
            path: path.to_string(),
            key: self.key.clone(),
            name: name.to_string(),
            cause,
        })
    }

    /// Eager validation, in order: imports, removed names, unknown keys
    pub(super) fn run_prechecks(&self) -> SettingsResult<()> {
        if self.options.precheck_imports {
            for name in &self.import_names {
                let raw = self.raw_value(name)?;
                self.perform_import(name, raw)?;
            }
        }

        if self.options.precheck_removed {
            let overrides = self.overrides();
            for name in overrides.keys().chain(self.defaults.keys()) {
                self.check_removed(name)?;
            }
        }

        if self.options.precheck_defaults && self.options.strict_defaults {
            for name in self.overrides().keys() {
                self.check_default_exists(name)?;
            }
        }

        Ok(())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl std::fmt::Debug for SettingsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsResolver")
            .field("key", &self.key)
            .field("defaults", &self.defaults)
            .field("import_names", &self.import_names)
            .field("options", &self.options)
            .field("provider", &self.provider.name())
            .field("imports", &self.imports.name())
            .field("cached", &self.cached_names())
            .finish_non_exhaustive()
    }
}
