//! Catalog loader - fetches manifest entries and builds the post catalog

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::config::BlogConfig;

/// Why a single manifest entry (or the whole load) failed
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {file} failed: {source}")]
    Request {
        file: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{file}: unexpected status {status}")]
    Status {
        file: String,
        status: reqwest::StatusCode,
    },

    #[error("duplicate slug {0:?} in manifest")]
    DuplicateSlug(String),
}

/// Where manifest entries are fetched from
#[derive(Debug, Clone)]
pub enum PostSource {
    /// Entries are paths relative to a directory
    Dir(PathBuf),
    /// Entries are paths relative to a base URL
    Url {
        base: String,
        client: reqwest::Client,
    },
}

impl PostSource {
    pub fn dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self::Dir(dir.into())
    }

    pub fn url(base: &str) -> Self {
        Self::Url {
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch one manifest entry as text.
    pub async fn fetch(&self, file: &str) -> Result<String, LoadError> {
        match self {
            PostSource::Dir(dir) => {
                tokio::fs::read_to_string(dir.join(file))
                    .await
                    .map_err(|source| LoadError::Read {
                        file: file.to_string(),
                        source,
                    })
            }
            PostSource::Url { base, client } => {
                let url = format!("{}/{}", base, file);
                let response =
                    client
                        .get(&url)
                        .send()
                        .await
                        .map_err(|source| LoadError::Request {
                            file: file.to_string(),
                            source,
                        })?;
                if !response.status().is_success() {
                    return Err(LoadError::Status {
                        file: file.to_string(),
                        status: response.status(),
                    });
                }
                response
                    .text()
                    .await
                    .map_err(|source| LoadError::Request {
                        file: file.to_string(),
                        source,
                    })
            }
        }
    }
}

/// Loads the post catalog from a manifest of source files
pub struct CatalogLoader {
    source: Arc<PostSource>,
    config: Arc<BlogConfig>,
}

impl CatalogLoader {
    pub fn new(config: &BlogConfig, source: PostSource) -> Self {
        Self {
            source: Arc::new(source),
            config: Arc::new(config.clone()),
        }
    }

    /// Fetch every manifest entry and build the catalog.
    ///
    /// Entries are fetched concurrently and all fetches are awaited before
    /// the catalog is assembled. An entry that fails to fetch is logged and
    /// skipped without disturbing the rest. The result is sorted by date,
    /// newest first; equal dates keep their pre-sort order. Duplicate slugs
    /// across the manifest abort the load.
    pub async fn load(&self, manifest: &[String]) -> Result<Vec<Post>, LoadError> {
        let mut handles = Vec::with_capacity(manifest.len());
        for file in manifest {
            let source = Arc::clone(&self.source);
            let config = Arc::clone(&self.config);
            let file = file.clone();
            handles.push(tokio::spawn(async move {
                let content = source.fetch(&file).await?;
                let (fm, body) = FrontMatter::parse(&content);
                Ok::<Post, LoadError>(Post::from_parts(&file, fm, body, &config))
            }));
        }

        let mut posts = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(Ok(post)) => {
                    tracing::debug!("loaded post {:?} from {}", post.slug, post.source_file);
                    posts.push(post);
                }
                Ok(Err(e)) => {
                    tracing::warn!("skipping manifest entry: {}", e);
                }
                Err(e) => {
                    tracing::warn!("load task failed: {}", e);
                }
            }
        }

        posts.sort_by(Post::cmp_date_desc);
        validate_slugs(&posts)?;

        Ok(posts)
    }
}

/// Reject catalogs where two manifest entries resolve to the same slug.
fn validate_slugs(posts: &[Post]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.slug.as_str()) {
            return Err(LoadError::DuplicateSlug(post.slug.clone()));
        }
    }
    Ok(())
}

/// Build a manifest from the markdown files under a directory, sorted by
/// path. A convenience for filesystem sources with no explicit manifest.
pub fn discover_manifest(dir: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_markdown_file(e.path()))
        .filter_map(|e| {
            e.path()
                .strip_prefix(dir)
                .ok()
                .and_then(|p| p.to_str())
                .map(str::to_string)
        })
        .collect();
    entries.sort();
    entries
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn loader_for(dir: &Path) -> CatalogLoader {
        CatalogLoader::new(&BlogConfig::default(), PostSource::dir(dir))
    }

    #[tokio::test]
    async fn test_load_sorts_by_date_descending() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "old.md", "---\ndate: 2023-05-01\n---\nold");
        write_post(tmp.path(), "new.md", "---\ndate: 2024-06-01\n---\nnew");
        write_post(tmp.path(), "mid.md", "---\ndate: 2024-01-15\n---\nmid");

        let manifest = vec!["old.md".into(), "new.md".into(), "mid.md".into()];
        let posts = loader_for(tmp.path()).load(&manifest).await.unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_failed_entry_is_skipped_not_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        // a.md intentionally missing
        write_post(
            tmp.path(),
            "b.md",
            "---\ndate: 2024-02-01\ncategory: Dev\n---\nbody",
        );

        let manifest = vec!["a.md".into(), "b.md".into()];
        let posts = loader_for(tmp.path()).load(&manifest).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "b");
        assert_eq!(posts[0].category, "Dev");
    }

    #[tokio::test]
    async fn test_never_more_records_than_manifest_entries() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "a.md", "a");
        write_post(tmp.path(), "b.md", "b");

        let manifest = vec!["a.md".into(), "b.md".into(), "missing.md".into()];
        let posts = loader_for(tmp.path()).load(&manifest).await.unwrap();
        assert!(posts.len() <= manifest.len());
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_slug_fails_loudly() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "a.md", "---\nslug: same\n---\nx");
        write_post(tmp.path(), "b.md", "---\nslug: same\n---\ny");

        let manifest = vec!["a.md".into(), "b.md".into()];
        let err = loader_for(tmp.path()).load(&manifest).await.unwrap_err();
        assert!(matches!(err, LoadError::DuplicateSlug(s) if s == "same"));
    }

    #[tokio::test]
    async fn test_discover_manifest_finds_markdown() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "b.md", "b");
        write_post(tmp.path(), "a.markdown", "a");
        write_post(tmp.path(), "notes.txt", "not a post");

        let manifest = discover_manifest(tmp.path());
        assert_eq!(manifest, vec!["a.markdown".to_string(), "b.md".to_string()]);
    }
}
