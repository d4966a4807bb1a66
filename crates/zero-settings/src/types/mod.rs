//! Core types shared by the resolver and its collaborators

mod setting;
mod options;

pub use setting::{Setting, Imported, ImportObject};
pub use options::ResolverOptions;

/// Mapping from setting name to raw value
///
/// Insertion order is preserved, so iteration follows the order the host
/// supplied the entries in.
pub type SettingsMap = serde_json::Map<String, serde_json::Value>;
