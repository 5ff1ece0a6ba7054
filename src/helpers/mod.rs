//! Helper functions shared by the CLI commands

pub mod date;
pub mod toc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::BlogConfig;

/// Characters escaped in query-string values
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'&')
    .add(b'=')
    .add(b'%')
    .add(b'+');

/// Display name for a category, applying the configured mapping
pub fn display_category<'a>(config: &'a BlogConfig, category: &'a str) -> &'a str {
    config
        .category_map
        .get(category)
        .map(String::as_str)
        .unwrap_or(category)
}

/// Canonical URL of a post
pub fn post_url(config: &BlogConfig, slug: &str) -> String {
    format!(
        "{}{}?post={}",
        config.url.trim_end_matches('/'),
        config.root,
        utf8_percent_encode(slug, QUERY_VALUE)
    )
}

/// Tweet-intent share link for a post
pub fn twitter_share_url(config: &BlogConfig, title: &str, slug: &str) -> String {
    let text = format!("Check out \"{}\" on {}", title, config.title);
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        utf8_percent_encode(&text, QUERY_VALUE),
        utf8_percent_encode(&post_url(config, slug), QUERY_VALUE)
    )
}
