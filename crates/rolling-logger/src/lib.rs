//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a circular buffer and
//! forwards every line to the browser console (stderr on native targets).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    /// Create a logger. A capacity of 0 disables the history but still forwards lines.
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Drop all buffered lines
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }

    fn push_line(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// Format a record as `HH:MM:SS.mmm LEVEL target: message`
pub fn format_line(record: &Record<'_>) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install a global logger. Returns the installed instance so callers can read its history.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder()
            .level(level)
            .target("test")
            .args(args)
            .build()
    }

    #[test]
    fn test_buffer_keeps_most_recent_lines() {
        let logger = RollingLogger::new(LevelFilter::Trace, 2);
        logger.log(&record_at(Level::Info, format_args!("one")));
        logger.log(&record_at(Level::Info, format_args!("two")));
        logger.log(&record_at(Level::Info, format_args!("three")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test: two"));
        assert!(lines[1].ends_with("test: three"));
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let logger = RollingLogger::new(LevelFilter::Warn, 8);
        logger.log(&record_at(Level::Debug, format_args!("hidden")));
        logger.log(&record_at(Level::Error, format_args!("shown")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        logger.log(&record_at(Level::Info, format_args!("gone")));
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_init_returns_handle_with_history() {
        let logger = init(LevelFilter::Info, 8).unwrap();
        log::info!(target: "riego", "row added");
        log::debug!(target: "riego", "below level");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("riego: row added"));
        assert!(init(LevelFilter::Info, 8).is_err());
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new(LevelFilter::Info, 4);
        logger.log(&record_at(Level::Info, format_args!("x")));
        logger.clear();
        assert!(logger.recent().is_empty());
    }
}
