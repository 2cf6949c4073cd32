//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! into a shared buffer that the UI renders in its log panel.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for display.
///
const MAX_ENTRIES: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Bounded, shareable buffer of formatted log lines. Oldest entries are
/// dropped first.
///
#[derive(Clone, Default)]
pub struct LogEntries {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogEntries {
    pub fn push(&self, entry: String) {
        // A poisoned buffer only loses log lines
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Custom logger that captures this crate's logs to a [`LogEntries`] buffer
///
pub struct CustomLogger {
    level: LevelFilter,
    entries: LogEntries,
}

impl CustomLogger {
    pub fn new(level: LevelFilter, entries: LogEntries) -> Self {
        CustomLogger { level, entries }
    }

    /// Install as the global logger.
    ///
    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.entries.push(format_log(record));
        }
    }

    fn flush(&self) {}
}
