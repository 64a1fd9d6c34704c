//! Line-level grammar rules. Each rule is total: when a line does not fit
//! the expected shape the rule falls back to treating the whole line as the
//! primary value.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that open a list item when they lead a line.
pub const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

static LEADING_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•*]\s*").unwrap());
static TITLE_AT_COMPANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s+at\s+(.*)$").unwrap());

/// True when the trimmed line starts with `-`, `•` or `*`.
pub fn is_bullet_line(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_MARKERS.as_slice())
}

/// Removes one leading bullet marker plus the whitespace after it.
/// Lines without a marker come back trimmed and otherwise unchanged.
pub fn strip_bullet_marker(line: &str) -> String {
    LEADING_BULLET
        .replace(line.trim(), "")
        .trim()
        .to_string()
}

/// `<title> at <company>`, split on the first whitespace-delimited `at`.
///
/// Fallback: no ` at ` separator means the whole line is the title and the
/// company is empty.
pub fn split_title_company(line: &str) -> (String, String) {
    let line = line.trim();
    match TITLE_AT_COMPANY.captures(line) {
        Some(caps) => {
            let title = caps[1].trim();
            let title = if title.is_empty() { line } else { title };
            (title.to_string(), caps[2].trim().to_string())
        }
        None => (line.to_string(), String::new()),
    }
}

/// `<degree>, <school>`, split on the first comma; later commas stay in the
/// school name.
///
/// Fallbacks: without a comma the line is split on tabs (extra tab-separated
/// parts are rejoined with ", "). Without either the whole line is the degree.
pub fn split_degree_school(line: &str) -> (String, String) {
    let line = line.trim();
    if let Some((degree, school)) = line.split_once(',') {
        return (degree.trim().to_string(), school.trim().to_string());
    }

    let mut parts = line.split('\t');
    let degree = parts.next().unwrap_or_default().trim();
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        return (line.to_string(), String::new());
    }
    (degree.to_string(), rest.join(", ").trim().to_string())
}
