//! Front-matter parsing

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// An opening `---` line, a header block, a closing `---` line, then the body.
    static ref HEADER_RE: Regex =
        Regex::new(r"(?s)\A---[ \t]*\n(.*?)\n---[ \t]*\n(.*)\z").unwrap();
}

/// Metadata header of a post file.
///
/// Recognized keys get typed fields; everything else lands in `extra` in
/// file order. All values are plain strings in the source format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub cover: Option<String>,
    pub slug: Option<String>,
    pub read_time: Option<u32>,
    pub author: Option<String>,

    /// Unrecognized keys, retained but unused by the pipeline
    pub extra: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from a raw post file.
    ///
    /// Returns `(front_matter, body)`. Input without a `---` delimited header
    /// yields empty front-matter and the whole input as body. Header lines
    /// are split at the first colon; lines without a colon are ignored; a
    /// single layer of matching enclosing quotes is stripped from values.
    /// The body is trimmed of leading and trailing whitespace in both the
    /// header and no-header cases. Never fails on malformed input.
    pub fn parse(content: &str) -> (Self, String) {
        let Some(caps) = HEADER_RE.captures(content) else {
            return (Self::default(), content.trim().to_string());
        };

        let mut fm = Self::default();
        for line in caps[1].lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = strip_quotes(value.trim());
            match key {
                "title" => fm.title = Some(value.to_string()),
                "date" => fm.date = Some(value.to_string()),
                "category" => fm.category = Some(value.to_string()),
                "excerpt" => fm.excerpt = Some(value.to_string()),
                "cover" => fm.cover = Some(value.to_string()),
                "slug" => fm.slug = Some(value.to_string()),
                "readTime" => fm.read_time = value.parse().ok(),
                "author" => fm.author = Some(value.to_string()),
                _ => {
                    fm.extra.insert(key.to_string(), value.to_string());
                }
            }
        }

        (fm, caps[2].trim().to_string())
    }
}

/// Strip one layer of matching `"` or `'` quotes enclosing a value.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_roundtrip() {
        let content = "---\ntitle: T\ndate: 2024-01-01\ncategory: C\n---\n\nKnown body text.\n";

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("T"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-01"));
        assert_eq!(fm.category.as_deref(), Some("C"));
        assert_eq!(body, "Known body text.");
    }

    #[test]
    fn test_no_header_is_all_body() {
        let content = "Just a paragraph.\n\nAnd another.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_header_is_all_body() {
        let content = "---\ntitle: Dangling\n\nNo closing marker here.";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.title.is_none());
        assert_eq!(body, content.trim());
    }

    #[test]
    fn test_quotes_stripped_once() {
        let content =
            "---\ntitle: \"Quoted Title\"\nexcerpt: 'single'\ncover: \"mismatched'\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Quoted Title"));
        assert_eq!(fm.excerpt.as_deref(), Some("single"));
        // Mismatched quotes are left alone
        assert_eq!(fm.cover.as_deref(), Some("\"mismatched'"));
    }

    #[test]
    fn test_lines_without_colon_ignored() {
        let content = "---\ntitle: Ok\njust some words\ncategory: Dev\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Ok"));
        assert_eq!(fm.category.as_deref(), Some("Dev"));
        assert!(fm.extra.is_empty());
    }

    #[test]
    fn test_value_split_at_first_colon() {
        let content = "---\ncover: https://example.com/a.jpg\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.cover.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[test]
    fn test_unrecognized_keys_retained_in_order() {
        let content = "---\nlayout: wide\ntitle: T\ndraft: yes\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content);
        let keys: Vec<_> = fm.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["layout", "draft"]);
        assert_eq!(fm.extra.get("layout").map(String::as_str), Some("wide"));
    }

    #[test]
    fn test_read_time_parsed_as_minutes() {
        let content = "---\nreadTime: 7\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.read_time, Some(7));

        let content = "---\nreadTime: soon\n---\nbody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.read_time, None);
    }
}
