// src/util/text.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKDOWN_PREFIX: Regex =
        Regex::new(r"^\s*(?:#{1,6}\s+|>\s*|[-*+]\s+(?:\[[ xX]\]\s+)?|\d+[.)]\s+)*")
            .expect("Failed to compile markdown prefix regex");
}

/// Extract the first line of plain text from a Markdown note body.
///
/// This function:
/// 1. Skips blank lines
/// 2. Strips heading, quote, list and task markers from the line start
/// 3. Trims whitespace
///
/// # Examples
///
/// ```
/// use notaview::util::text::extract_first_line;
///
/// let body = "\n# Groceries\n- milk";
/// assert_eq!(extract_first_line(body), "Groceries");
/// ```
pub fn extract_first_line(body: &str) -> String {
    body.lines()
        .map(|line| MARKDOWN_PREFIX.replace(line, "").trim().to_string())
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
