//! Override provider trait

use crate::types::SettingsMap;

/// Source of user-supplied overrides, keyed by namespace
///
/// Implementations:
/// - `MemoryOverrideProvider`: In-memory, mutable at runtime
/// - `EmptyOverrideProvider`: No overrides at all
/// - Host adapters: read the application's global configuration store
///
/// The resolver never writes through this trait.
pub trait OverrideProvider: Send + Sync {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Current overrides for a namespace
    ///
    /// Returns an empty map when nothing is registered under `key`.
    fn get_overrides(&self, key: &str) -> SettingsMap;

    /// Check whether a namespace has any overrides
    fn has_overrides(&self, key: &str) -> bool {
        !self.get_overrides(key).is_empty()
    }
}
