//! Provider with no overrides

use crate::types::SettingsMap;
use super::traits::OverrideProvider;

/// A provider that never has overrides
///
/// Resolvers built without an explicit provider use this, so only their
/// local overrides and defaults apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyOverrideProvider;

impl EmptyOverrideProvider {
    pub fn new() -> Self {
        Self
    }
}

impl OverrideProvider for EmptyOverrideProvider {
    fn name(&self) -> &str {
        "empty"
    }

    fn get_overrides(&self, _key: &str) -> SettingsMap {
        SettingsMap::new()
    }

    fn has_overrides(&self, _key: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_provider() {
        let provider = EmptyOverrideProvider::new();
        assert_eq!(provider.name(), "empty");
        assert!(provider.get_overrides("APP").is_empty());
        assert!(!provider.has_overrides("APP"));
    }
}
