//! HTML highlighting of resolved entity spans.

use std::collections::HashSet;

use crate::oracle::Span;

/// Render the text with allowed spans wrapped in `<mark>` elements.
///
/// Spans must already be resolved (non-overlapping, sorted by start); the
/// source text is HTML-escaped throughout.
pub(super) fn render(text: &str, spans: &[Span], allowed: &HashSet<String>) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 64);
    let mut cursor = 0;

    for span in spans.iter().filter(|s| allowed.contains(&s.label)) {
        out.push_str(&escape(&text[cursor..span.start]));
        out.push_str(&format!(
            "<mark class=\"entity\" data-label=\"{}\">{}<span class=\"entity-label\">{}</span></mark>",
            escape(&span.label),
            escape(&span.text),
            escape(&span.label),
        ));
        cursor = span.end;
    }
    out.push_str(&escape(&text[cursor..]));

    out
}

fn escape(text: &str) -> String {
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
