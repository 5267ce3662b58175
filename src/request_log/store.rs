//! NDJSON-backed request log store.

use super::models::LogRecord;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};

/// Append-only store of request log records.
pub trait RequestLogStore: Send + Sync {
    /// Append one record as a single flushed line.
    fn append(&self, record: &LogRecord) -> Result<()>;

    /// Return the last `count` records in write order.
    fn recent(&self, count: usize) -> Result<Vec<LogRecord>>;

    /// Remove every record.
    fn clear(&self) -> Result<()>;
}

/// File-backed store, one JSON record per line.
///
/// The file handle is opened in append mode and guarded by a mutex, so
/// concurrent requests never interleave partial lines. Reads and the
/// truncating clear take the same lock.
pub struct FileRequestLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileRequestLog {
    /// Open the log file at `path`, creating it when missing.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open request log at {}", path.display()))?;
        info!(path = %path.display(), "Request log initialized");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RequestLogStore for FileRequestLog {
    fn append(&self, record: &LogRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("Failed to serialize log record")?;
        let mut file = self.file.lock().unwrap();
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        file.flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        Ok(())
    }

    fn recent(&self, count: usize) -> Result<Vec<LogRecord>> {
        let _guard = self.file.lock().unwrap();
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        let start = lines.len().saturating_sub(count);
        let records = lines[start..]
            .iter()
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "Skipping unparseable request log line");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    fn clear(&self) -> Result<()> {
        let file = self.file.lock().unwrap();
        file.set_len(0)
            .with_context(|| format!("Failed to truncate {}", self.path.display()))?;
        info!(path = %self.path.display(), "Request log cleared");
        Ok(())
    }
}
