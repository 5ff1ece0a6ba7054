//! Table-of-contents generation from rendered HTML

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADING_RE: Regex =
        Regex::new(r#"(?s)<h([1-6])(?:\s+[^>]*?id="([^"]*)")?[^>]*>(.*?)</h[1-6]>"#).unwrap();
}

/// Build a nested `<ol>` table of contents from rendered post HTML.
///
/// Headings deeper than `max_depth` are skipped. Anchors reuse the `id`
/// attributes the markdown renderer assigned; a heading without one gets a
/// freshly slugified id. No headings at all yields an empty-state marker
/// rather than an empty list.
pub fn toc(content: &str, max_depth: usize) -> String {
    let mut items = Vec::new();
    for caps in HEADING_RE.captures_iter(content) {
        let level: usize = caps[1].parse().unwrap_or(6);
        if level > max_depth {
            continue;
        }
        let text = strip_tags(&caps[3]);
        let id = caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| slug::slugify(&text));
        items.push((level, id, text));
    }

    if items.is_empty() {
        return r#"<p class="toc-empty">No sections found</p>"#.to_string();
    }

    let mut html = String::from(r#"<ol class="toc">"#);
    let mut current_level = 1;

    for (level, id, text) in items {
        while current_level < level {
            html.push_str(r#"<ol class="toc-child">"#);
            current_level += 1;
        }
        while current_level > level {
            html.push_str("</ol>");
            current_level -= 1;
        }
        html.push_str(&format!(
            r##"<li class="toc-item toc-level-{}"><a class="toc-link" href="#{}"><span class="toc-text">{}</span></a></li>"##,
            level, id, text
        ));
    }

    while current_level > 1 {
        html.push_str("</ol>");
        current_level -= 1;
    }
    html.push_str("</ol>");
    html
}

/// Drop markup, keep text
fn strip_tags(s: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}
