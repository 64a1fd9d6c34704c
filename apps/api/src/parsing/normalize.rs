use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses every whitespace run (newlines included) to one space and trims
/// both ends. Used for single-line fields.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Rewrites CRLF to LF and otherwise leaves line structure alone, so pasted
/// and typed multi-line text segment identically.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}
