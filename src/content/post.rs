//! Post model

use std::cmp::Ordering;
use std::path::Path;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::FrontMatter;
use crate::config::BlogConfig;
use crate::helpers::date::{parse_date_string, today_string};

/// A blog post record, fully defaulted at construction
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Unique identifier used for navigation and lookups
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the source, sortable format
    pub date: String,

    /// Single category
    pub category: String,

    /// Short summary shown on cards and the post header
    pub excerpt: String,

    /// Cover image path
    pub cover: String,

    /// Estimated reading time in minutes
    pub read_time: u32,

    /// Post author
    pub author: String,

    /// Markdown body with the metadata header stripped
    pub body: String,

    /// Manifest entry the record was loaded from (diagnostic)
    pub source_file: String,

    /// Unrecognized front-matter keys
    pub extra: IndexMap<String, String>,
}

impl Post {
    /// Build a record from parsed front-matter, filling every default.
    pub fn from_parts(
        source_file: &str,
        fm: FrontMatter,
        body: String,
        config: &BlogConfig,
    ) -> Self {
        let slug = fm.slug.unwrap_or_else(|| file_stem(source_file));

        let excerpt = match fm.excerpt {
            Some(excerpt) => excerpt,
            None if config.auto_excerpt => generate_excerpt(&body, config.excerpt_words),
            None => String::new(),
        };

        let read_time = fm
            .read_time
            .unwrap_or_else(|| reading_time(&body, config.words_per_minute));

        let cover = fm.cover.unwrap_or_else(|| {
            format!("{}/{}.jpg", config.cover_dir.trim_end_matches('/'), slug)
        });

        Self {
            title: fm.title.unwrap_or_else(|| "Untitled".to_string()),
            date: fm.date.unwrap_or_else(today_string),
            category: fm
                .category
                .unwrap_or_else(|| config.default_category.clone()),
            author: fm.author.unwrap_or_else(|| config.author.clone()),
            excerpt,
            cover,
            read_time,
            slug,
            body,
            source_file: source_file.to_string(),
            extra: fm.extra,
        }
    }

    /// Parsed publication date; `None` when the date string is unreadable.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_date_string(&self.date)
    }

    /// Ordering for the catalog: newest first, unparseable dates last.
    pub(crate) fn cmp_date_desc(a: &Post, b: &Post) -> Ordering {
        b.parsed_date().cmp(&a.parsed_date())
    }

    /// The next-newer post in a date-descending list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// The next-older post in a date-descending list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos < posts.len() - 1 {
            Some(&posts[pos + 1])
        } else {
            None
        }
    }
}

/// File name with directories and the extension stripped
fn file_stem(source_file: &str) -> String {
    Path::new(source_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

lazy_static! {
    static ref FENCED_CODE: Regex = Regex::new(r"(?s)```.*?```").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]*)`").unwrap();
    static ref IMAGE: Regex = Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"</?[^>]+(>|$)").unwrap();
    static ref MARKUP: Regex = Regex::new(r"[#>*_~`-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Summarize a markdown body into plain text.
///
/// Strips fenced code blocks, inline code spans, images, link syntax,
/// residual HTML tags and emphasis/heading punctuation, collapses
/// whitespace, then truncates to `word_limit` words with an ellipsis.
pub fn generate_excerpt(markdown: &str, word_limit: usize) -> String {
    let text = FENCED_CODE.replace_all(markdown, " ");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = IMAGE.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = HTML_TAG.replace_all(&text, " ");
    let text = MARKUP.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = text.trim();

    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= word_limit {
        return text.to_string();
    }
    format!("{}...", words[..word_limit].join(" "))
}

/// Reading time in whole minutes, never below one.
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    let words = text.split_whitespace().count() as u32;
    words.div_ceil(words_per_minute).max(1)
}
