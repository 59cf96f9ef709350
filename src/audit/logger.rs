//! Append-only audit logger
//!
//! `audit.log` holds one JSON object per line. Lines are only ever appended;
//! a missing file is an empty log.

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{BurnRateError, BurnRateResult};

use super::entry::AuditEntry;

/// Writes and reads the JSONL audit log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a single line
    pub fn log(&self, entry: &AuditEntry) -> BurnRateResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| BurnRateError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| {
                file.write_all(line.as_bytes())?;
                file.flush()
            })
            .map_err(|e| BurnRateError::Io(format!("Failed to append to audit log: {}", e)))
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> BurnRateResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.for_each_entry(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> BurnRateResult<Vec<AuditEntry>> {
        let mut window = VecDeque::with_capacity(count.min(256));
        self.for_each_entry(|entry| {
            if count == 0 {
                return;
            }
            if window.len() == count {
                window.pop_front();
            }
            window.push_back(entry);
        })?;
        Ok(window.into())
    }

    fn for_each_entry(&self, mut visit: impl FnMut(AuditEntry)) -> BurnRateResult<()> {
        let content = match fs::read_to_string(&self.log_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(BurnRateError::Io(format!("Failed to read audit log: {}", e)));
            }
        };

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(line).map_err(|e| {
                BurnRateError::Json(format!("Bad audit entry at line {}: {}", index + 1, e))
            })?;
            visit(entry);
        }

        Ok(())
    }

    /// Location of the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
