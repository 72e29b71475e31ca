//! Logger utility for application-wide logging
//!
//! This module provides a logger that backs the standard log crate. Records
//! are echoed to stderr above a console threshold and, optionally, written
//! in full to a log file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level echoed to stderr
    console_level: LevelFilter,
}

impl Logger {
    /// Creates a logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, appended to if it exists
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            console_level: LevelFilter::Off,
        })
    }

    /// Creates a logger without a file
    pub fn console_only() -> Self {
        Logger {
            file: Mutex::new(None),
            console_level: LevelFilter::Off,
        }
    }

    /// Set the most verbose level echoed to stderr
    pub fn with_console_level(mut self, level: LevelFilter) -> Self {
        self.console_level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// Does nothing when no file is configured.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = &mut *guard {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Optional file receiving every record down to Debug
    /// * `verbose` - Echo Debug and Info records to stderr as well
    pub fn init_global_logger(log_file: Option<&Path>, verbose: bool) -> io::Result<()> {
        let console_level = if verbose { LevelFilter::Debug } else { LevelFilter::Off };
        let global_logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::console_only(),
        }
        .with_console_level(console_level);

        let has_file = log_file.is_some();
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(if has_file { LevelFilter::Debug } else { console_level });
        Ok(())
    }

    fn has_file(&self) -> bool {
        self.file.lock().map(|f| f.is_some()).unwrap_or(false)
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.level(), record.args());
        if self.has_file() {
            let _ = self.log(&message);
        }

        if record.level() <= self.console_level {
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
