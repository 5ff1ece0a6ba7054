//! Markdown rendering with syntax highlighting and heading anchors

use std::collections::HashSet;

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Markdown renderer
///
/// Produces HTML with highlighted code blocks and slugified, deduplicated
/// `id` attributes on headings so the table of contents can anchor to them.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Render a post body to HTML. Never fails; the worst case for a code
    /// block is an unhighlighted `<pre>` fallback.
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        // Code blocks are buffered so the whole block can be highlighted at
        // once; headings are buffered so an id can be derived from their text.
        let mut in_code_block = false;
        let mut code_lang: Option<String> = None;
        let mut code_content = String::new();
        let mut heading: Option<(Tag, Vec<Event>)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    let highlighted = self.highlight_code(&code_content, code_lang.take().as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
                Event::Text(text) if in_code_block => {
                    code_content.push_str(&text);
                }
                Event::Start(tag @ Tag::Heading { .. }) => {
                    heading = Some((tag, Vec::new()));
                }
                Event::End(TagEnd::Heading(level)) => {
                    if let Some((start, inner)) = heading.take() {
                        let text = heading_text(&inner);
                        let id = unique_heading_id(&text, &mut seen_ids);
                        if let Tag::Heading {
                            level, classes, attrs, ..
                        } = start
                        {
                            events.push(Event::Start(Tag::Heading {
                                level,
                                id: Some(CowStr::from(id)),
                                classes,
                                attrs,
                            }));
                        }
                        events.extend(inner);
                    }
                    events.push(Event::End(TagEnd::Heading(level)));
                }
                event if heading.is_some() => {
                    if let Some((_, inner)) = heading.as_mut() {
                        inner.push(event);
                    }
                }
                event => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("syntect ships with default themes")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => highlighted,
            Err(e) => {
                tracing::warn!("highlighting failed, falling back to plain text: {}", e);
                format!("<pre><code>{}</code></pre>", escape_html(code))
            }
        }
    }
}

/// Visible text of a buffered heading
fn heading_text(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => Some(text.as_ref()),
            _ => None,
        })
        .collect()
}

/// Slugified heading id; repeats get `-1`, `-2`, ... suffixes.
fn unique_heading_id(text: &str, seen: &mut HashSet<String>) -> String {
    let base = slug::slugify(text);
    let base = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };

    let mut id = base.clone();
    let mut counter = 1;
    while !seen.insert(id.clone()) {
        id = format!("{}-{}", base, counter);
        counter += 1;
    }
    id
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_get_slugified_ids() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\n## Sub Section\n");
        assert!(html.contains(r##"<h1 id="hello-world">"##));
        assert!(html.contains(r##"<h2 id="sub-section">"##));
    }

    #[test]
    fn test_duplicate_headings_get_suffixes() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## Notes\n\n## Notes\n\n## Notes\n");
        assert!(html.contains(r##"id="notes""##));
        assert!(html.contains(r##"id="notes-1""##));
        assert!(html.contains(r##"id="notes-2""##));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```nosuchlang\nplain words\n```\n");
        assert!(html.contains("plain words"));
    }

    #[test]
    fn test_inline_formatting_survives_in_headings() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# With `code` inside\n");
        assert!(html.contains(r##"id="with-code-inside""##));
        assert!(html.contains("<code>code</code>"));
    }
}
