//! Logger that keeps records in memory

use parking_lot::Mutex;

use super::traits::{Logger, LogLevel};

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Captures every message, for asserting on log output
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records so far, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages logged at exactly `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.level == level)
            .map(|record| record.message.clone())
            .collect()
    }

    /// Check for a message at `level` containing `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|record| record.level == level && record.message.contains(needle))
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures() {
        let logger = MemoryLogger::new();
        logger.info("first");
        logger.warn("second thing");
        crate::log_debug!(logger, "third {}", 3);

        assert_eq!(logger.records().len(), 3);
        assert_eq!(logger.messages(LogLevel::Info), vec!["first".to_string()]);
        assert!(logger.contains(LogLevel::Warn, "second"));
        assert!(logger.contains(LogLevel::Debug, "third 3"));
        assert!(!logger.contains(LogLevel::Error, "first"));

        logger.clear();
        assert!(logger.records().is_empty());
    }
}
