//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Content
    /// Ordered list of post files the loader fetches. When empty, filesystem
    /// sources fall back to discovering markdown files under `posts_dir`.
    pub manifest: Vec<String>,
    pub posts_dir: String,
    pub data_dir: String,
    pub cover_dir: String,
    pub default_category: String,
    #[serde(default)]
    pub category_map: HashMap<String, String>,

    // List view
    pub per_page: usize,
    pub auto_excerpt: bool,
    pub excerpt_words: usize,
    pub words_per_minute: u32,

    // Rendering
    pub highlight_theme: String,
    pub toc_max_depth: usize,

    // Comments
    #[serde(default)]
    pub comments: CommentsConfig,

    // Music player
    #[serde(default)]
    pub playlist: Vec<TrackConfig>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            author: "Anonymous".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            manifest: Vec::new(),
            posts_dir: "posts".to_string(),
            data_dir: ".blogpipe".to_string(),
            cover_dir: "assets/images".to_string(),
            default_category: "uncategorized".to_string(),
            category_map: HashMap::new(),

            per_page: 4,
            auto_excerpt: true,
            excerpt_words: 30,
            words_per_minute: 150,

            highlight_theme: "base16-ocean.dark".to_string(),
            toc_max_depth: 2,

            comments: CommentsConfig::default(),
            playlist: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Comment widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// auto | remote | local
    pub backend: String,
    pub supabase_url: String,
    pub supabase_key: String,
    pub table: String,
    pub max_length: usize,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            backend: "auto".to_string(),
            supabase_url: String::new(),
            supabase_key: String::new(),
            table: "comments".to_string(),
            max_length: 2000,
        }
    }
}

/// One entry of the ambient music playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackConfig {
    pub file: String,
    pub title: String,
}
