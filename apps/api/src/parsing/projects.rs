use crate::models::entries::ProjectEntry;
use crate::parsing::blocks::{split_blocks, split_lines};
use crate::parsing::grammar::strip_bullet_marker;

/// Parses the `projects` field: first line of a block is the title, the rest
/// are bullets. Markers are stripped from both.
pub fn parse_projects(text: &str) -> Vec<ProjectEntry> {
    split_blocks(text)
        .iter()
        .filter_map(|block| {
            let lines = split_lines(block);
            let (first, rest) = lines.split_first()?;
            Some(ProjectEntry {
                title: strip_bullet_marker(first),
                bullets: rest
                    .iter()
                    .map(|line| strip_bullet_marker(line))
                    .filter(|bullet| !bullet.is_empty())
                    .collect(),
            })
        })
        .collect()
}

/// One trimmed paragraph per block of the `achievements` field.
pub fn parse_achievements(text: &str) -> Vec<String> {
    split_blocks(text)
}
