//! Sanitizing renderer for `richtext` cells.
//!
//! Cells are stored as markdown and rendered through `pulldown_cmark`. The
//! parser emits raw HTML blocks and spans as-is; those events are downgraded
//! to text here so they reach the output escaped. Formatting produced by
//! markdown itself (emphasis, lists, links) passes through untouched.

use pulldown_cmark::{html, Event, Options, Parser};

/// Renders a richtext cell to HTML with raw markup neutralized.
pub fn richtext_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let sanitized = parser.map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, sanitized);
    output
}

/// Minimal escaping for text interpolated into hand-assembled markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_tags_come_out_inert() {
        let output = richtext_to_html("<script>alert('x')</script>");
        assert!(!output.contains("<script>"), "{output}");
        assert!(output.contains("&lt;script&gt;"), "{output}");
    }

    #[test]
    fn inline_html_is_escaped_too() {
        let output = richtext_to_html("before <img src=x onerror=alert(1)> after");
        assert!(!output.contains("<img"), "{output}");
        assert!(output.contains("&lt;img"), "{output}");
    }

    #[test]
    fn markdown_formatting_still_renders() {
        let output = richtext_to_html("**bold** and *italic*\n\n- item");
        assert!(output.contains("<strong>bold</strong>"), "{output}");
        assert!(output.contains("<em>italic</em>"), "{output}");
        assert!(output.contains("<li>item</li>"), "{output}");
    }

    #[test]
    fn escape_html_covers_the_usual_suspects() {
        assert_eq!(
            escape_html(r#"<a href="x">&"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;"
        );
    }
}
