//! Behavioral flags of a settings resolver

use serde::{Deserialize, Serialize};

/// Flags controlling caching, strictness and eager validation
///
/// Every flag defaults to `true`. Missing fields fall back to their default
/// when deserializing, so hosts can store only the flags they change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Memoize resolved values and the override snapshot
    pub use_cache: bool,
    /// Only names present in the defaults are valid
    pub strict_defaults: bool,
    /// Reject unknown override keys at construction (needs `strict_defaults`)
    #[serde(alias = "pre_check_defaults")]
    pub precheck_defaults: bool,
    /// Resolve every import setting at construction
    #[serde(alias = "pre_check_imports")]
    pub precheck_imports: bool,
    /// Reject removed names in overrides or defaults at construction
    #[serde(alias = "pre_check_removed")]
    pub precheck_removed: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            strict_defaults: true,
            precheck_defaults: true,
            precheck_imports: true,
            precheck_removed: true,
        }
    }
}

impl ResolverOptions {
    /// All checks deferred to first access, caching still on
    pub fn lazy() -> Self {
        Self {
            precheck_defaults: false,
            precheck_imports: false,
            precheck_removed: false,
            ..Self::default()
        }
    }
}
