//! Bridge to the `tracing` ecosystem

use super::traits::{Logger, LogLevel};

/// Forwards every message as a `tracing` event with target `zero_settings`
///
/// Use this when the host already installs a tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "zero_settings", "{}", message),
            LogLevel::Debug => tracing::debug!(target: "zero_settings", "{}", message),
            LogLevel::Info => tracing::info!(target: "zero_settings", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "zero_settings", "{}", message),
            LogLevel::Error => tracing::error!(target: "zero_settings", "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_without_subscriber() {
        // No subscriber installed: events are dropped silently
        let logger = TracingLogger::new();
        logger.log(LogLevel::Trace, "trace message");
        logger.debug("debug message");
        logger.warn("warn message");
    }
}
