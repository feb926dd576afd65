//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log crate
//! and adds file output. Records are written to the log file and mirrored to
//! stderr so that stdout stays free for command output.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

use crate::grid::GridInfo;

/// File-backed logger
pub struct Logger {
    /// File handle for log output, None when file logging is off
    file: Mutex<Option<File>>,
    /// Most verbose level written by the `Log` implementation
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened.
    /// Existing files are appended to.
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
        })
    }

    /// A logger that writes nothing to disk
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Info,
        }
    }

    /// Set the most verbose level recorded through the `log` facade
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs grid metadata in a formatted way
    ///
    /// # Arguments
    ///
    /// * `name` - Grid name
    /// * `info` - Metadata to record
    pub fn log_grid_info(&self, name: &str, info: &GridInfo) -> io::Result<()> {
        self.log(&format!("Grid info for {}:", name))?;
        for line in info.to_string().lines() {
            self.log(&format!("  {}", line))?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?.with_level(level);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Region;
    use crate::grid::Registration;

    #[test]
    fn test_log_grid_info_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kit.log");
        let logger = Logger::new(path.to_str().unwrap()).unwrap();

        let info = GridInfo {
            spacing: 100.0,
            region: Region::from_bounds(-100.0, 100.0, 200.0, 400.0),
            min: 40000.0,
            max: 160000.0,
            registration: Registration::Gridline,
        };
        logger.log_grid_info("misfit", &info).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Grid info for misfit:\n  Spacing: 100\n"));
        assert!(content.contains("  Region: -100/100/200/400\n"));
        assert!(content.contains("  Registration: g\n"));
    }

    #[test]
    fn test_disabled_logger_accepts_messages() {
        assert!(Logger::disabled().log("nothing").is_ok());
    }
}
