//! Zero Settings
//!
//! A lazily evaluated, cached and validated settings facade for libraries.
//! A library declares its defaults once; the host application supplies
//! overrides through an [`OverrideProvider`]. Access goes through
//! [`SettingsResolver::get`], which rejects removed settings, enforces that
//! only known names are used, and resolves import paths to registered
//! objects.
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use zero_settings::{MemoryOverrideProvider, SettingsResolver};
//!
//! let provider = Arc::new(MemoryOverrideProvider::new());
//! provider.set_value("MYLIB", "PAGE_SIZE", json!(50));
//!
//! let defaults = json!({"PAGE_SIZE": 20, "ORDERING": ["-created"]});
//! let settings = SettingsResolver::builder("MYLIB", defaults.as_object().cloned().unwrap())
//!     .removed("LEGACY_PAGINATION", "")
//!     .docs_url("https://mylib.example/settings")
//!     .provider(provider)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.get_as::<u32>("PAGE_SIZE").unwrap(), 50);
//! assert!(settings.get("LEGACY_PAGINATION").is_err());
//! ```

pub mod types;
pub mod overrides;
pub mod imports;
pub mod signals;
pub mod logging;
pub mod resolver;

// Re-export commonly used types
pub use types::{Setting, Imported, ImportObject, ResolverOptions, SettingsMap};

pub use overrides::{OverrideProvider, MemoryOverrideProvider, EmptyOverrideProvider};

pub use imports::{
    ImportResolver, ImportFailure,
    RegistryImportResolver, MemoryImportResolver,
    register_import, register_import_value, unregister_import, import_string,
};

pub use signals::{ChangeSignal, SettingChanged, SubscriptionId, setting_changed};

pub use logging::{Logger, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, TracingLogger, MemoryLogger};

pub use resolver::{
    SettingsResolver, SettingsBuilder, SettingsArgs,
    SettingsError, ArgumentError, SettingsResult,
    register_for_reload, register_for_global_reload, unregister_for_reload,
};
