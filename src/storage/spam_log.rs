//! Spam log -- bounded local record of blocked submissions.
//!
//! Storage file: `{data_dir}/spam_log.json`, a JSON array of entries,
//! oldest first. Read-modify-write per append; a missing or corrupt file
//! reads as an empty log.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::SPAM_LOG_CAPACITY;
use crate::spam::SpamVerdict;
use crate::{time_utils, GuardResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamLogEntry {
    pub timestamp: String,
    #[serde(flatten)]
    pub verdict: SpamVerdict,
}

#[derive(Debug, Clone)]
pub struct SpamLog {
    path: PathBuf,
    capacity: usize,
}

impl SpamLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: SPAM_LOG_CAPACITY,
        }
    }

    /// Log at `{data_dir}/spam_log.json`.
    pub fn open_default() -> Self {
        Self::new(super::path_utils::spam_log_path())
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, oldest first. Empty if absent or unparseable.
    pub fn entries(&self) -> Vec<SpamLogEntry> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Spam log unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Append one verdict, evicting the oldest entries beyond capacity.
    /// Returns the resulting log length.
    pub fn append(&self, verdict: &SpamVerdict) -> GuardResult<usize> {
        let mut entries = self.entries();
        entries.push(SpamLogEntry {
            timestamp: time_utils::to_rfc3339(&time_utils::now()),
            verdict: verdict.clone(),
        });
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(entries.len())
    }

    /// Best-effort append: failures are logged, never returned.
    pub fn log_spam_attempt(&self, verdict: &SpamVerdict) {
        match self.append(verdict) {
            Ok(len) => tracing::info!(entries = len, score = verdict.score, "Spam attempt logged"),
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "Failed to log spam attempt"),
        }
    }

    /// Remove the log file. Absent file is not an error.
    pub fn clear(&self) -> GuardResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spam::{SpamDetails, SpamSignal};

    fn verdict(n: u32) -> SpamVerdict {
        SpamVerdict::from_signals(
            vec![SpamSignal::issue(format!("issue {}", n))],
            SpamDetails {
                honeypot: "filled".into(),
                time_taken: "0.4s".into(),
                mouse_moved: false,
                interactions: n,
            },
        )
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = SpamLog::new(dir.path().join("spam_log.json"));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spam_log.json");
        std::fs::write(&path, "{{{ definitely not json").unwrap();
        let log = SpamLog::new(&path);
        assert!(log.entries().is_empty());
        assert_eq!(log.append(&verdict(1)).unwrap(), 1);
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let log = SpamLog::new(dir.path().join("nested").join("spam_log.json"));
        for n in 0..60 {
            let len = log.append(&verdict(n)).unwrap();
            assert!(len <= 50);
        }
        let entries = log.entries();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0].verdict.details.interactions, 10);
        assert_eq!(entries[49].verdict.details.interactions, 59);
    }

    #[test]
    fn test_entry_fields_are_flattened() {
        let dir = tempfile::tempdir().unwrap();
        let log = SpamLog::new(dir.path().join("spam_log.json"));
        log.append(&verdict(3)).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(log.path()).unwrap()).unwrap();
        let first = &raw[0];
        assert!(first["timestamp"].is_string());
        assert_eq!(first["is_spam"], serde_json::json!(true));
        assert_eq!(first["score"], serde_json::json!(1.0));
        assert_eq!(first["details"]["interactions"], serde_json::json!(3));
    }

    #[test]
    fn test_best_effort_swallows_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // Parent is a regular file, so create_dir_all fails
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let log = SpamLog::new(blocker.join("spam_log.json"));
        assert!(log.append(&verdict(1)).is_err());
        log.log_spam_attempt(&verdict(1));
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let log = SpamLog::new(dir.path().join("spam_log.json")).with_capacity(5);
        log.append(&verdict(1)).unwrap();
        log.clear().unwrap();
        assert!(log.entries().is_empty());
        log.clear().unwrap();
    }
}
