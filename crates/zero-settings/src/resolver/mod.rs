//! Settings resolution for one namespace
//!
//! [`SettingsResolver`] is the facade a library exposes for its settings;
//! [`SettingsBuilder`] and [`SettingsArgs`] construct it, and
//! [`register_for_reload`] ties its cache to a change signal.

mod error;
mod args;
mod builder;
mod settings_resolver;
mod reload;

pub use error::{ArgumentError, SettingsError, SettingsResult};
pub use args::SettingsArgs;
pub use builder::SettingsBuilder;
pub use settings_resolver::SettingsResolver;
pub use reload::{register_for_reload, register_for_global_reload, unregister_for_reload};
