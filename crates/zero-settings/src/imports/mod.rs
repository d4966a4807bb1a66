//! Import-path resolution
//!
//! Settings listed as imports hold dotted paths (`"myapp.handlers.Audit"`)
//! that resolve to live objects. Objects are registered up front by the host,
//! either in the process-wide registry or in a dedicated resolver.

mod traits;
mod registry;
mod memory;

pub use traits::{ImportResolver, ImportFailure, split_import_path};
pub use registry::{
    RegistryImportResolver,
    register_import, register_import_value, unregister_import,
    has_import, list_imports, import_string,
};
pub use memory::MemoryImportResolver;
