//! Override provider abstractions
//!
//! The host application owns the store of user-supplied overrides; the
//! resolver only reads from it:
//! - `MemoryOverrideProvider`: In-memory store, also used as a test fake
//! - `EmptyOverrideProvider`: Always reports no overrides

mod traits;
mod memory;
mod empty;

pub use traits::OverrideProvider;
pub use memory::MemoryOverrideProvider;
pub use empty::EmptyOverrideProvider;
