//! Anonymous comments with a local JSON file or remote REST backend

mod local;
mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CommentsConfig;

/// One comment on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_slug: String,
    pub name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("comment cannot be empty")]
    Empty,

    #[error("comment is too long (max {0} characters)")]
    TooLong(usize),

    #[error("comment backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The active comment backend, resolved from configuration.
///
/// `auto` selects the remote backend when a Supabase URL and key are both
/// configured, and the local file store otherwise.
pub enum CommentStore {
    Local(LocalStore),
    Remote(RemoteStore),
}

impl CommentStore {
    pub fn from_config(config: &CommentsConfig, data_dir: &Path) -> Self {
        let remote_configured =
            !config.supabase_url.is_empty() && !config.supabase_key.is_empty();
        let use_remote = match config.backend.as_str() {
            "remote" => true,
            "local" => false,
            _ => remote_configured,
        };

        if use_remote {
            Self::Remote(RemoteStore::new(
                &config.supabase_url,
                &config.supabase_key,
                &config.table,
            ))
        } else {
            Self::Local(LocalStore::new(data_dir))
        }
    }

    /// Comments for a post, oldest first. A post nobody commented on yields
    /// an empty list.
    pub async fn list(&self, slug: &str) -> Result<Vec<Comment>, CommentError> {
        match self {
            Self::Local(store) => Ok(store.list(slug)),
            Self::Remote(store) => store.list(slug).await,
        }
    }

    /// Validate and store a comment. The name defaults to "Anonymous"; the
    /// text must be non-empty after trimming and within the length limit.
    pub async fn submit(
        &self,
        slug: &str,
        name: &str,
        text: &str,
        max_length: usize,
    ) -> Result<(), CommentError> {
        let name = normalize_name(name);
        let text = text.trim();
        if text.is_empty() {
            return Err(CommentError::Empty);
        }
        if text.len() > max_length {
            return Err(CommentError::TooLong(max_length));
        }

        match self {
            Self::Local(store) => store.submit(slug, &name, text),
            Self::Remote(store) => store.submit(slug, &name, text).await,
        }
    }

    /// Remove a comment by id. Moderation is local-only; the remote backend
    /// rejects deletion.
    pub async fn delete(&self, slug: &str, id: i64) -> Result<bool, CommentError> {
        match self {
            Self::Local(store) => store.delete(slug, id),
            Self::Remote(_) => Err(CommentError::Backend(
                "deletion is not supported on the remote backend".to_string(),
            )),
        }
    }
}

fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Anonymous".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_store(dir: &Path) -> CommentStore {
        CommentStore::from_config(&CommentsConfig::default(), dir)
    }

    #[tokio::test]
    async fn test_submit_and_list_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());

        store.submit("post-a", "Ada", "First!", 2000).await.unwrap();
        store.submit("post-a", "Ben", "Second.", 2000).await.unwrap();
        store.submit("post-b", "Cy", "Elsewhere.", 2000).await.unwrap();

        let comments = store.list("post-a").await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].name, "Ada");
        assert_eq!(comments[1].text, "Second.");
        assert!(store.list("post-c").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let err = store.submit("post-a", "Ada", "   ", 2000).await.unwrap_err();
        assert!(matches!(err, CommentError::Empty));
    }

    #[tokio::test]
    async fn test_over_length_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let long = "x".repeat(2001);
        let err = store.submit("post-a", "Ada", &long, 2000).await.unwrap_err();
        assert!(matches!(err, CommentError::TooLong(2000)));
    }

    #[tokio::test]
    async fn test_blank_name_becomes_anonymous() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        store.submit("post-a", "  ", "Hi there", 2000).await.unwrap();
        let comments = store.list("post-a").await.unwrap();
        assert_eq!(comments[0].name, "Anonymous");
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        store.submit("post-a", "Ada", "Remove me", 2000).await.unwrap();

        let id = store.list("post-a").await.unwrap()[0].id;
        assert!(store.delete("post-a", id).await.unwrap());
        assert!(store.list("post-a").await.unwrap().is_empty());
        assert!(!store.delete("post-a", id).await.unwrap());
    }

    #[test]
    fn test_auto_backend_resolution() {
        let tmp = tempfile::tempdir().unwrap();

        let config = CommentsConfig::default();
        assert!(matches!(
            CommentStore::from_config(&config, tmp.path()),
            CommentStore::Local(_)
        ));

        let config = CommentsConfig {
            supabase_url: "https://x.supabase.co".to_string(),
            supabase_key: "key".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            CommentStore::from_config(&config, tmp.path()),
            CommentStore::Remote(_)
        ));

        let config = CommentsConfig {
            backend: "local".to_string(),
            supabase_url: "https://x.supabase.co".to_string(),
            supabase_key: "key".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            CommentStore::from_config(&config, tmp.path()),
            CommentStore::Local(_)
        ));
    }
}
