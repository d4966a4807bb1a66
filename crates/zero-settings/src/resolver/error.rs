//! Settings error types

use thiserror::Error;

use crate::imports::ImportFailure;

/// A constructor argument violated its type contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("settings arguments must be a dict")]
    NotAMapping,

    #[error("key must be a string")]
    Key,

    #[error("key must not be empty")]
    EmptyKey,

    #[error("defaults must be a dict")]
    Defaults,

    #[error("import_strings must be a list/tuple of strings or None")]
    ImportStrings,

    #[error("removed_settings must be a dict of setting: msg or None")]
    RemovedSettings,

    #[error("settings_doc must be a string or None")]
    SettingsDoc,

    #[error("user_settings must be a dict or None")]
    UserSettings,

    #[error("{0} must be boolean")]
    NotBoolean(&'static str),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// Errors raised while building a resolver or resolving a setting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("{message}")]
    Removed {
        key: String,
        name: String,
        message: String,
    },

    #[error("Invalid setting: '{key}.{name}'")]
    InvalidSetting { key: String, name: String },

    #[error("Could not import '{path}' for setting '{key}.{name}'. {cause}.")]
    Import {
        path: String,
        key: String,
        name: String,
        #[source]
        cause: ImportFailure,
    },

    #[error("Setting '{key}.{name}' has an unexpected type: {message}")]
    Type {
        key: String,
        name: String,
        message: String,
    },
}

impl SettingsError {
    /// The setting name involved, if any
    pub fn setting_name(&self) -> Option<&str> {
        match self {
            SettingsError::Argument(_) => None,
            SettingsError::Removed { name, .. }
            | SettingsError::InvalidSetting { name, .. }
            | SettingsError::Import { name, .. }
            | SettingsError::Type { name, .. } => Some(name),
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, SettingsError::Removed { .. })
    }

    pub fn is_invalid_setting(&self) -> bool {
        matches!(self, SettingsError::InvalidSetting { .. })
    }

    pub fn is_import(&self) -> bool {
        matches!(self, SettingsError::Import { .. })
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_messages() {
        assert_eq!(ArgumentError::Key.to_string(), "key must be a string");
        assert_eq!(
            ArgumentError::NotBoolean("use_cache").to_string(),
            "use_cache must be boolean"
        );
        let err: SettingsError = ArgumentError::Defaults.into();
        assert_eq!(err.to_string(), "defaults must be a dict");
        assert_eq!(err.setting_name(), None);
    }

    #[test]
    fn test_import_message() {
        let err = SettingsError::Import {
            path: "utils.NotExists".to_string(),
            key: "APP".to_string(),
            name: "IMPORT".to_string(),
            cause: ImportFailure::MissingAttribute {
                module: "utils".to_string(),
                attribute: "NotExists".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Could not import 'utils.NotExists' for setting 'APP.IMPORT'. \
             Module \"utils\" does not define a \"NotExists\" attribute/class."
        );
        assert!(err.is_import());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.setting_name(), Some("IMPORT"));
    }

    #[test]
    fn test_invalid_setting_message() {
        let err = SettingsError::InvalidSetting {
            key: "APP".to_string(),
            name: "NO_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid setting: 'APP.NO_KEY'");
        assert!(err.is_invalid_setting());
        assert!(!err.is_removed());
    }
}
