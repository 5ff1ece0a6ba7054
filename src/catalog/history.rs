//! Persisted search history

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const HISTORY_FILE: &str = "search-history.json";
const MAX_ENTRIES: usize = 10;

/// Recent search queries, newest first, capped at ten entries
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    /// Load from the data directory; a missing or corrupt file degrades to
    /// an empty history.
    pub fn load(data_dir: &Path) -> Self {
        match fs::read_to_string(Self::path(data_dir)) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, data_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(data_dir)?;
        fs::write(Self::path(data_dir), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(HISTORY_FILE)
    }

    /// Record a query: an existing duplicate moves to the front.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Previous queries containing `text`, excluding an exact repeat.
    pub fn matching(&self, text: &str, limit: usize) -> Vec<&str> {
        let text_lower = text.to_lowercase();
        self.entries
            .iter()
            .filter(|q| q.to_lowercase().contains(&text_lower) && q.as_str() != text)
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_moves_duplicates_to_front() {
        let mut history = SearchHistory::default();
        history.record("rust");
        history.record("blog");
        history.record("rust");
        assert_eq!(history.entries(), &["rust".to_string(), "blog".to_string()]);
    }

    #[test]
    fn test_record_caps_at_ten() {
        let mut history = SearchHistory::default();
        for i in 0..15 {
            history.record(&format!("query {}", i));
        }
        assert_eq!(history.entries().len(), 10);
        assert_eq!(history.entries()[0], "query 14");
    }

    #[test]
    fn test_blank_queries_are_not_recorded() {
        let mut history = SearchHistory::default();
        history.record("   ");
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_matching_excludes_exact_repeat() {
        let mut history = SearchHistory::default();
        history.record("rust async");
        history.record("rust");
        assert_eq!(history.matching("rust", 3), vec!["rust async"]);
    }

    #[test]
    fn test_persistence_roundtrip_and_corrupt_file() {
        let tmp = tempfile::tempdir().unwrap();

        let mut history = SearchHistory::default();
        history.record("oden");
        history.save(tmp.path()).unwrap();

        let loaded = SearchHistory::load(tmp.path());
        assert_eq!(loaded.entries(), &["oden".to_string()]);

        fs::write(tmp.path().join(HISTORY_FILE), "not json").unwrap();
        assert!(SearchHistory::load(tmp.path()).entries().is_empty());
    }
}
