//! Console logger implementation

use super::traits::{Logger, LogLevel};

/// A logger that writes to the console
///
/// Info goes to stdout, everything else to stderr. Messages below the minimum
/// level are dropped.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Console logger with the default prefix, showing info and above
    pub fn new() -> Self {
        Self {
            prefix: "[ZeroSettings]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    fn format(&self, level: LogLevel, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        if level == LogLevel::Info {
            println!("{}", self.format(level, message));
        } else {
            eprintln!("{}", self.format(level, message));
        }
    }
}
