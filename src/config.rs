//! Heuristic configuration -- tuned thresholds kept as data.
//!
//! Loaded from `{data_dir}/config.json`. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Submissions faster than this (seconds since the form opened) are an issue.
    pub min_fill_secs: f64,
    /// Fewer input events than this is a warning.
    pub min_interactions: u32,
    /// More links than this is a warning.
    pub max_links: usize,
    /// Case-insensitive substrings that mark the message as spam.
    pub keywords: Vec<String>,
    /// Name of the hidden decoy field.
    pub honeypot_field: String,
    /// Spam log entries kept (oldest dropped first).
    pub log_capacity: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            min_fill_secs: constants::MIN_FILL_SECS,
            min_interactions: constants::MIN_INTERACTIONS,
            max_links: constants::MAX_LINKS,
            keywords: constants::SPAM_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            honeypot_field: constants::HONEYPOT_FIELD.to_string(),
            log_capacity: constants::SPAM_LOG_CAPACITY,
        }
    }
}

impl HeuristicConfig {
    /// Load from a JSON file, or defaults if absent/corrupted.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read config, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => config.normalized(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config JSON, using defaults");
                Self::default()
            }
        }
    }

    /// Keywords lower-cased once so matching is a plain substring test.
    fn normalized(mut self) -> Self {
        for k in &mut self.keywords {
            *k = k.to_lowercase();
        }
        self.keywords.retain(|k| !k.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let c = HeuristicConfig::default();
        assert_eq!(c.min_fill_secs, 3.0);
        assert_eq!(c.min_interactions, 4);
        assert_eq!(c.max_links, 2);
        assert_eq!(c.keywords.len(), 12);
        assert_eq!(c.honeypot_field, "website");
        assert_eq!(c.log_capacity, 50);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = HeuristicConfig::load(&dir.path().join("config.json"));
        assert_eq!(c, HeuristicConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"min_fill_secs": 5.0, "keywords": ["Crypto", " "]}"#).unwrap();

        let c = HeuristicConfig::load(&path);
        assert_eq!(c.min_fill_secs, 5.0);
        assert_eq!(c.keywords, vec!["crypto".to_string()]);
        assert_eq!(c.min_interactions, 4);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(HeuristicConfig::load(&path), HeuristicConfig::default());
    }
}
