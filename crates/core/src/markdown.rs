//! Markdown-subset to HTML conversion for advice text.
//!
//! The advice service replies in loose markdown; the dashboard only
//! ever needs three constructs from it. This module supports exactly:
//!
//! - bold spans (`**text**`)
//! - single-level bullet lists (lines starting with `*`)
//! - line breaks (`\n` → `<br>`, except immediately after a list item)
//!
//! This is a closed, non-extensible subset — not a markdown parser.
//! Anything else passes through verbatim.

use regex::Regex;

/// Convert advice text to HTML using the closed markdown subset.
pub fn advice_to_html(text: &str) -> String {
    // Compilation cannot fail for these fixed patterns.
    let bold = Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern");
    let bullet = Regex::new(r"(?m)^\s*\*\s+(.*)$").expect("valid bullet pattern");

    let html = bold.replace_all(text, "<strong>$1</strong>");
    let html = bullet.replace_all(&html, "<li>$1</li>");

    let mut html = html.into_owned();
    if html.contains("<li>") {
        html = format!("<ul>{html}</ul>");
    }

    // Newlines become <br>, but not the ones that terminate a list
    // item — those are list structure, not prose breaks.
    let mut out = String::with_capacity(html.len());
    for ch in html.chars() {
        if ch == '\n' && !out.ends_with("</li>") {
            out.push_str("<br>");
        } else {
            out.push(ch);
        }
    }
    out
}
