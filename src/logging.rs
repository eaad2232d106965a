//! File-backed `log` sink.
//!
//! The terminal belongs to the TUI while it runs, so records go to a file or
//! nowhere at all.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;

/// Appends one line per record to a log file.
pub struct FileLogger {
    level: log::LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open (or create) `path` for appending.
    pub fn open(path: &Path, level: log::LevelFilter) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }

    /// Install as the global logger. Fails if one is already installed.
    pub fn install(self) -> std::result::Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

fn format_record(record: &log::Record, unix_secs: u64) -> String {
    format!(
        "{} [{}:{}] {} {}: {}",
        unix_secs,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.level(),
        record.target(),
        record.args()
    )
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_record(record, secs));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install a `FileLogger` when a log file is configured. Without one, records are dropped.
pub fn init(path: Option<&Path>, level: log::LevelFilter) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let logger = FileLogger::open(path, level)?;
    if logger.install().is_err() {
        log::warn!("logger already installed, not writing to {}", path.display());
    }
    Ok(())
}
