//! blogpipe: a manifest-driven markdown blog content engine
//!
//! Loads a catalog of markdown posts from a manifest of files, parses their
//! front-matter, and serves category/text filtering, pagination, rendering
//! and comments to a thin presentation layer.

pub mod catalog;
pub mod commands;
pub mod comments;
pub mod config;
pub mod content;
pub mod helpers;
pub mod prefs;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The blog application: configuration plus resolved directories
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory post files are read from
    pub posts_dir: PathBuf,
    /// Directory for comments, history and preference files
    pub data_dir: PathBuf,
}

impl Blog {
    /// Create a blog instance from a directory, reading `_config.yml` when
    /// present.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let data_dir = base_dir.join(&config.data_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            data_dir,
        })
    }

    /// The manifest to load: the configured list, or for filesystem setups
    /// without one, the markdown files discovered under the posts directory.
    pub fn manifest(&self) -> Vec<String> {
        if !self.config.manifest.is_empty() {
            self.config.manifest.clone()
        } else {
            content::discover_manifest(&self.posts_dir)
        }
    }

    /// Post source for this blog (local posts directory)
    pub fn source(&self) -> content::PostSource {
        content::PostSource::dir(&self.posts_dir)
    }

    /// A fresh reader session sized from the configuration
    pub fn session(&self) -> catalog::Session {
        catalog::Session::new(self.config.per_page)
    }

    /// The configured comment store
    pub fn comment_store(&self) -> comments::CommentStore {
        comments::CommentStore::from_config(&self.config.comments, &self.data_dir)
    }
}
