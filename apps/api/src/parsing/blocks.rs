//! Block segmentation shared by every multi-entry parser.
//!
//! A block is a maximal run of non-blank lines; one or more blank (or
//! whitespace-only) lines separate blocks.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Splits text into trimmed, non-empty blocks in source order.
pub fn split_blocks(text: &str) -> Vec<String> {
    BLANK_LINE_RUN
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(String::from)
        .collect()
}

/// Non-empty trimmed lines of one block.
pub fn split_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
