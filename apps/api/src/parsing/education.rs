use crate::models::entries::EducationEntry;
use crate::parsing::blocks::{split_blocks, split_lines};
use crate::parsing::grammar::{split_degree_school, strip_bullet_marker};

/// Parses the `education` field: `<degree>, <school>` on the first line of
/// each block, every later line is a note.
pub fn parse_education(text: &str) -> Vec<EducationEntry> {
    split_blocks(text)
        .iter()
        .filter_map(|block| {
            let lines = split_lines(block);
            let (first, rest) = lines.split_first()?;
            let (degree, school) = split_degree_school(first);
            let notes = rest
                .iter()
                .map(|line| strip_bullet_marker(line))
                .filter(|note| !note.is_empty())
                .collect();
            Some(EducationEntry {
                degree,
                school,
                notes,
            })
        })
        .collect()
}
