//! Logging abstractions for host-agnostic logging

mod traits;
mod noop;
mod console;
mod memory;
mod tracing_logger;

pub use traits::{Logger, LogLevel, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::{MemoryLogger, LogRecord};
pub use tracing_logger::TracingLogger;
