//! Debug log file.
//!
//! Every record is written as `[seconds.millis] LEVEL target: message` so
//! failures caught at the drawing boundary can be matched against host
//! activity afterwards.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

/// Path of the debug log, next to the host executable.
pub fn log_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_default()
        .parent()
        .unwrap_or(Path::new("."))
        .join("gridview_debug.log")
}

/// Wall-clock timestamp as `seconds.millis` since the Unix epoch.
pub fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

/// Format one record as a log line (without trailing newline).
pub fn format_line(record: &Record<'_>) -> String {
    format!(
        "[{}] {:<5} {}: {}",
        timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Appends formatted records to a file.
struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        let mut file = self.file.lock();
        let _ = writeln!(file, "{line}");
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

/// Install the file logger at [`log_path`].
///
/// Fails if the file can't be opened or another logger is already set; the
/// overlay keeps working either way since all log output is diagnostic.
pub fn init(level: LevelFilter) -> Result<(), InitError> {
    init_at(&log_path(), level)
}

/// Install the file logger writing to `path`.
pub fn init_at(path: &Path, level: LevelFilter) -> Result<(), InitError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
        level,
    }))?;
    log::set_max_level(level);
    Ok(())
}

/// Why the logger could not be installed.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to open log file: {0}")]
    Open(#[from] std::io::Error),
    #[error("logger already installed: {0}")]
    AlreadySet(#[from] SetLoggerError),
}
