//! Restricted-markdown rendering for rich-text fields.
//!
//! The editor toolbar only produces bold, italic, underline (raw `<u>`),
//! strikethrough, ordered/unordered lists, and links, so the renderer
//! honours exactly that subset. Constructs outside it degrade to their
//! escaped text content, and input whose inline HTML cannot be balanced
//! falls back to the raw text wholesale; a rich-text field must never
//! fail the surrounding render.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Renders a rich-text field to HTML. Never fails: if the input cannot be
/// rendered, it is returned escaped with newlines preserved as `<br>`.
pub fn to_html(input: &str) -> String {
    match try_render(input) {
        Ok(html) => html,
        Err(RenderError::UnbalancedHtml) => escape(input).replace('\n', "<br>"),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum RenderError {
    UnbalancedHtml,
}

fn try_render(input: &str) -> Result<String, RenderError> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(input, options);

    let mut out = String::with_capacity(input.len() + 32);
    // Raw inline tags we let through; must balance by end of input.
    let mut raw_stack: Vec<&'static str> = Vec::new();
    // Whether each open link emitted an anchor (unsafe hrefs do not).
    let mut link_stack: Vec<bool> = Vec::new();

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => out.push_str("<p>"),
                Tag::Emphasis => out.push_str("<em>"),
                Tag::Strong => out.push_str("<strong>"),
                Tag::Strikethrough => out.push_str("<s>"),
                Tag::List(Some(start)) => {
                    if start == 1 {
                        out.push_str("<ol>");
                    } else {
                        out.push_str(&format!("<ol start=\"{start}\">"));
                    }
                }
                Tag::List(None) => out.push_str("<ul>"),
                Tag::Item => out.push_str("<li>"),
                Tag::Link { dest_url, .. } => {
                    let safe = safe_href(&dest_url);
                    if safe {
                        out.push_str(&format!("<a href=\"{}\">", escape(&dest_url)));
                    }
                    link_stack.push(safe);
                }
                // Outside the subset: drop the wrapper, keep the text.
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => out.push_str("</p>"),
                TagEnd::Emphasis => out.push_str("</em>"),
                TagEnd::Strong => out.push_str("</strong>"),
                TagEnd::Strikethrough => out.push_str("</s>"),
                TagEnd::List(true) => out.push_str("</ol>"),
                TagEnd::List(false) => out.push_str("</ul>"),
                TagEnd::Item => out.push_str("</li>"),
                TagEnd::Link => {
                    if link_stack.pop() == Some(true) {
                        out.push_str("</a>");
                    }
                }
                _ => {}
            },
            Event::Text(text) | Event::Code(text) => out.push_str(&escape(&text)),
            Event::Html(html) | Event::InlineHtml(html) => {
                push_raw_html(&html, &mut out, &mut raw_stack)?;
            }
            Event::SoftBreak => out.push(' '),
            Event::HardBreak | Event::Rule => out.push_str("<br>"),
            _ => {}
        }
    }

    if raw_stack.is_empty() {
        Ok(out)
    } else {
        Err(RenderError::UnbalancedHtml)
    }
}

/// Links only go to web and mail destinations; anything else (notably
/// `javascript:`) renders as plain text.
fn safe_href(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
}

/// Lets the allowlisted inline tags (`<u>`, `<br>`) through and escapes
/// everything else. Chunks may carry several tags plus surrounding text.
fn push_raw_html(
    html: &str,
    out: &mut String,
    raw_stack: &mut Vec<&'static str>,
) -> Result<(), RenderError> {
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        out.push_str(&escape(&rest[..open]));
        rest = &rest[open..];
        let Some(close) = rest.find('>') else {
            // A dangling '<' is plain text, not markup.
            out.push_str(&escape(rest));
            return Ok(());
        };
        let tag = &rest[..=close];
        rest = &rest[close + 1..];

        match tag {
            "<u>" => {
                raw_stack.push("u");
                out.push_str("<u>");
            }
            "</u>" => {
                if raw_stack.pop() != Some("u") {
                    return Err(RenderError::UnbalancedHtml);
                }
                out.push_str("</u>");
            }
            "<br>" | "<br/>" | "<br />" => out.push_str("<br>"),
            _ => out.push_str(&escape(tag)),
        }
    }
    out.push_str(&escape(rest));
    Ok(())
}

/// HTML-escapes user text for attribute and element positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_italic_strikethrough() {
        assert_eq!(
            to_html("**bold** and *italic* and ~~gone~~"),
            "<p><strong>bold</strong> and <em>italic</em> and <s>gone</s></p>"
        );
    }

    #[test]
    fn test_underline_raw_html_passes_through() {
        assert_eq!(
            to_html("an <u>underlined</u> word"),
            "<p>an <u>underlined</u> word</p>"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            to_html("- one\n- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
        assert_eq!(
            to_html("1. first\n2. second"),
            "<ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            to_html("[site](https://example.com)"),
            "<p><a href=\"https://example.com\">site</a></p>"
        );
        assert_eq!(
            to_html("[mail](mailto:a@b.c)"),
            "<p><a href=\"mailto:a@b.c\">mail</a></p>"
        );
    }

    #[test]
    fn test_script_scheme_links_are_stripped() {
        let html = to_html("[click](javascript:alert(1))");
        assert!(!html.contains("<a"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click"));
    }

    #[test]
    fn test_disallowed_html_is_escaped() {
        let html = to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_disallowed_block_constructs_keep_their_text() {
        // Headings are outside the subset: the wrapper is dropped.
        let html = to_html("# Title");
        assert!(html.contains("Title"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_unbalanced_underline_falls_back_to_raw_text() {
        let html = to_html("broken <u>markup with **stars**");
        assert!(!html.contains("<u>"));
        assert!(!html.contains("<strong>"));
        assert!(html.contains("&lt;u&gt;"));
        assert!(html.contains("**stars**"));
    }

    #[test]
    fn test_stray_close_tag_falls_back() {
        let html = to_html("oops</u> text");
        assert!(html.contains("&lt;/u&gt;"));
    }

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(to_html("a < b & c"), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }
}
