//! Local comment storage in a JSON file

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Comment, CommentError};

const COMMENTS_FILE: &str = "comments.json";

/// File-backed comment store, keyed by post slug
pub struct LocalStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CommentDb {
    comments: HashMap<String, Vec<Comment>>,
}

impl LocalStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(COMMENTS_FILE),
        }
    }

    /// Missing or corrupt databases degrade to empty.
    fn load_db(&self) -> CommentDb {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => CommentDb::default(),
        }
    }

    fn save_db(&self, db: &CommentDb) -> Result<(), CommentError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(db)
            .map_err(|e| CommentError::Backend(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn list(&self, slug: &str) -> Vec<Comment> {
        let db = self.load_db();
        let mut comments = db.comments.get(slug).cloned().unwrap_or_default();
        comments.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        comments
    }

    pub fn submit(&self, slug: &str, name: &str, text: &str) -> Result<(), CommentError> {
        let mut db = self.load_db();
        let entries = db.comments.entry(slug.to_string()).or_default();

        // Millisecond timestamp as id, bumped past any existing id so quick
        // successive submissions stay distinct
        let now = Utc::now();
        let id = entries
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(now.timestamp_millis(), |max| {
                now.timestamp_millis().max(max + 1)
            });

        entries.push(Comment {
            id,
            post_slug: slug.to_string(),
            name: name.to_string(),
            text: text.to_string(),
            created_at: now,
        });
        self.save_db(&db)
    }

    /// Returns whether a comment was actually removed.
    pub fn delete(&self, slug: &str, id: i64) -> Result<bool, CommentError> {
        let mut db = self.load_db();
        let Some(entries) = db.comments.get_mut(slug) else {
            return Ok(false);
        };
        let before = entries.len();
        entries.retain(|c| c.id != id);
        let removed = entries.len() < before;
        if removed {
            self.save_db(&db)?;
        }
        Ok(removed)
    }
}
