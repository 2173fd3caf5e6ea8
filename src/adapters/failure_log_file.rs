//! Append-only failure log under the user's home directory.
//!
//! Finder launches have no visible stderr, so each failure is also written
//! here as a single timestamped line.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::ports::FailureLog;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct FileFailureLog {
    path: Option<PathBuf>,
}

impl FileFailureLog {
    /// Log to `path`, or nowhere when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn append(path: &Path, line: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line)
    }
}

/// Render one log line: `[YYYY-MM-DD HH:MM:SS] message`.
pub fn format_entry(at: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}", at.format(TIMESTAMP_FORMAT), message)
}

impl FailureLog for FileFailureLog {
    fn record(&self, message: &str) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let line = format_entry(Local::now().naive_local(), message);
        let _ = Self::append(path, &line);
    }
}
