//! Typed construction of a settings resolver

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::imports::{ImportResolver, RegistryImportResolver};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::overrides::{EmptyOverrideProvider, OverrideProvider};
use crate::types::{ResolverOptions, SettingsMap};
use super::error::{ArgumentError, SettingsResult};
use super::settings_resolver::{CacheState, SettingsResolver};

/// Builder for [`SettingsResolver`]
///
/// Unset collaborators default to no provider overrides, the global import
/// registry, and a silent logger.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use zero_settings::overrides::MemoryOverrideProvider;
/// use zero_settings::resolver::SettingsBuilder;
///
/// let provider = Arc::new(MemoryOverrideProvider::new());
/// provider.set_value("MYLIB", "TIMEOUT", json!(30));
///
/// let defaults = json!({"TIMEOUT": 10, "RETRIES": 3});
/// let settings = SettingsBuilder::new("MYLIB", defaults.as_object().cloned().unwrap())
///     .provider(provider)
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.get("TIMEOUT").unwrap(), json!(30));
/// assert_eq!(settings.get("RETRIES").unwrap(), json!(3));
/// ```
pub struct SettingsBuilder {
    key: String,
    defaults: SettingsMap,
    local_overrides: SettingsMap,
    import_names: Vec<String>,
    removed_names: HashMap<String, String>,
    docs_url: String,
    options: ResolverOptions,
    provider: Option<Arc<dyn OverrideProvider>>,
    imports: Option<Arc<dyn ImportResolver>>,
    logger: Option<SharedLogger>,
}

impl SettingsBuilder {
    pub fn new(key: impl Into<String>, defaults: SettingsMap) -> Self {
        Self {
            key: key.into(),
            defaults,
            local_overrides: SettingsMap::new(),
            import_names: Vec::new(),
            removed_names: HashMap::new(),
            docs_url: String::new(),
            options: ResolverOptions::default(),
            provider: None,
            imports: None,
            logger: None,
        }
    }

    /// Overrides merged on top of the provider's, winning on collisions
    pub fn local_overrides(mut self, overrides: SettingsMap) -> Self {
        self.local_overrides = overrides;
        self
    }

    /// Names whose values are import paths
    pub fn import_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.import_names.contains(&name) {
                self.import_names.push(name);
            }
        }
        self
    }

    /// Mark a name as removed; an empty message selects the default one
    pub fn removed(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.removed_names.insert(name.into(), message.into());
        self
    }

    pub fn removed_names<I, K, M>(mut self, removed: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        for (name, message) in removed {
            self.removed_names.insert(name.into(), message.into());
        }
        self
    }

    /// Documentation link appended to default removal messages
    pub fn docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = url.into();
        self
    }

    pub fn options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn use_cache(mut self, enabled: bool) -> Self {
        self.options.use_cache = enabled;
        self
    }

    pub fn strict_defaults(mut self, enabled: bool) -> Self {
        self.options.strict_defaults = enabled;
        self
    }

    pub fn precheck_defaults(mut self, enabled: bool) -> Self {
        self.options.precheck_defaults = enabled;
        self
    }

    pub fn precheck_imports(mut self, enabled: bool) -> Self {
        self.options.precheck_imports = enabled;
        self
    }

    pub fn precheck_removed(mut self, enabled: bool) -> Self {
        self.options.precheck_removed = enabled;
        self
    }

    pub fn provider(mut self, provider: Arc<dyn OverrideProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn import_resolver(mut self, resolver: Arc<dyn ImportResolver>) -> Self {
        self.imports = Some(resolver);
        self
    }

    pub fn logger(mut self, logger: SharedLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the resolver and run the enabled eager checks
    ///
    /// Checks run imports first, then removed names, then unknown override
    /// keys, and stop at the first failure.
    pub fn build(self) -> SettingsResult<SettingsResolver> {
        if self.key.is_empty() {
            return Err(ArgumentError::EmptyKey.into());
        }

        let resolver = SettingsResolver {
            key: self.key,
            defaults: self.defaults,
            local_overrides: self.local_overrides,
            import_names: self.import_names,
            removed_names: self.removed_names,
            docs_url: self.docs_url,
            options: self.options,
            provider: self.provider.unwrap_or_else(|| Arc::new(EmptyOverrideProvider)),
            imports: self.imports.unwrap_or_else(|| Arc::new(RegistryImportResolver)),
            logger: self.logger.unwrap_or_else(|| Arc::new(NoOpLogger)),
            cache: Mutex::new(CacheState::default()),
        };

        resolver.run_prechecks()?;
        Ok(resolver)
    }

    /// Build straight into an `Arc`, ready for reload registration
    pub fn build_shared(self) -> SettingsResult<Arc<SettingsResolver>> {
        self.build().map(Arc::new)
    }
}

impl std::fmt::Debug for SettingsBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsBuilder")
            .field("key", &self.key)
            .field("defaults", &self.defaults.len())
            .field("import_names", &self.import_names)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
