//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns. Emoji and CJK count as two.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Cut a message to a single line of at most `width` columns, ending in "…".
pub fn shorten(s: &str, width: usize) -> String {
    let first = textwrap::wrap(s, width.max(1))
        .into_iter()
        .next()
        .map(|c| c.into_owned())
        .unwrap_or_default();

    if first.len() < s.trim_end().len() {
        format!("{first}…")
    } else {
        first
    }
}
