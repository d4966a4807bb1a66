//! Constructor arguments supplied as a dynamic value
//!
//! Hosts that describe their settings namespaces in data (JSON config, a
//! plugin manifest) go through [`SettingsArgs::from_value`], which enforces
//! the argument type contract before anything else runs.

use serde_json::Value;

use crate::types::{ResolverOptions, SettingsMap};
use super::builder::SettingsBuilder;
use super::error::ArgumentError;

const KNOWN_ARGUMENTS: &[&str] = &[
    "key",
    "defaults",
    "user_settings",
    "import_strings",
    "removed_settings",
    "settings_doc",
    "use_cache",
    "strict_defaults",
    "pre_check_defaults",
    "pre_check_imports",
    "pre_check_removed",
];

/// Validated constructor arguments
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsArgs {
    pub key: String,
    pub defaults: SettingsMap,
    pub import_names: Vec<String>,
    /// Removed name and its message; an empty message selects the default
    pub removed_names: Vec<(String, String)>,
    pub docs_url: String,
    pub local_overrides: SettingsMap,
    pub options: ResolverOptions,
}

impl SettingsArgs {
    /// Validate an argument object
    ///
    /// Checks run in a fixed order and stop at the first violation: `key`,
    /// `defaults`, `import_strings`, `removed_settings`, `settings_doc`,
    /// `user_settings`, then the boolean flags. Optional arguments that are
    /// missing or empty (`null`, `false`, `0`, `""`, `[]`, `{}`) fall back to
    /// their empty value; missing flags take their default.
    pub fn from_value(args: &Value) -> Result<Self, ArgumentError> {
        let args = args.as_object().ok_or(ArgumentError::NotAMapping)?;

        let key = match args.get("key") {
            Some(Value::String(key)) => key.clone(),
            _ => return Err(ArgumentError::Key),
        };

        let defaults = match args.get("defaults") {
            Some(Value::Object(defaults)) => defaults.clone(),
            _ => return Err(ArgumentError::Defaults),
        };

        let import_names = match args.get("import_strings") {
            None => Vec::new(),
            Some(value) if is_blank(value) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or(ArgumentError::ImportStrings)?,
            Some(_) => return Err(ArgumentError::ImportStrings),
        };

        let removed_names = match args.get("removed_settings") {
            None => Vec::new(),
            Some(value) if is_blank(value) => Vec::new(),
            Some(Value::Object(removed)) => removed
                .iter()
                .map(|(name, message)| match message {
                    Value::String(message) => Ok((name.clone(), message.clone())),
                    message if is_blank(message) => Ok((name.clone(), String::new())),
                    _ => Err(ArgumentError::RemovedSettings),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(ArgumentError::RemovedSettings),
        };

        let docs_url = match args.get("settings_doc") {
            None => String::new(),
            Some(value) if is_blank(value) => String::new(),
            Some(Value::String(url)) => url.clone(),
            Some(_) => return Err(ArgumentError::SettingsDoc),
        };

        let local_overrides = match args.get("user_settings") {
            None => SettingsMap::new(),
            Some(value) if is_blank(value) => SettingsMap::new(),
            Some(Value::Object(overrides)) => overrides.clone(),
            Some(_) => return Err(ArgumentError::UserSettings),
        };

        let defaults_flags = ResolverOptions::default();
        let options = ResolverOptions {
            use_cache: flag(args, "use_cache", defaults_flags.use_cache)?,
            strict_defaults: flag(args, "strict_defaults", defaults_flags.strict_defaults)?,
            precheck_defaults: flag(args, "pre_check_defaults", defaults_flags.precheck_defaults)?,
            precheck_imports: flag(args, "pre_check_imports", defaults_flags.precheck_imports)?,
            precheck_removed: flag(args, "pre_check_removed", defaults_flags.precheck_removed)?,
        };

        if let Some(unknown) = args.keys().find(|name| !KNOWN_ARGUMENTS.contains(&name.as_str())) {
            return Err(ArgumentError::Unexpected(unknown.clone()));
        }

        Ok(Self {
            key,
            defaults,
            import_names,
            removed_names,
            docs_url,
            local_overrides,
            options,
        })
    }

    /// Continue with the typed builder, where provider, import resolver and
    /// logger can be attached
    pub fn into_builder(self) -> SettingsBuilder {
        SettingsBuilder::new(self.key, self.defaults)
            .local_overrides(self.local_overrides)
            .import_names(self.import_names)
            .removed_names(self.removed_names)
            .docs_url(self.docs_url)
            .options(self.options)
    }
}

fn flag(
    args: &SettingsMap,
    name: &'static str,
    default: bool,
) -> Result<bool, ArgumentError> {
    match args.get(name) {
        None => Ok(default),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(ArgumentError::NotBoolean(name)),
    }
}

/// Values treated as "not given" for optional arguments
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}
