use crate::models::entries::ExperienceEntry;
use crate::parsing::blocks::{split_blocks, split_lines};
use crate::parsing::grammar::{is_bullet_line, split_title_company, strip_bullet_marker};

/// Parses the `experience` field into one entry per block.
///
/// The first line of a block is `<title> at <company>`. Unmarked lines between
/// it and the first marked bullet are kept as leading bullets, so a plain
/// description line is never lost.
pub fn parse_experience(text: &str) -> Vec<ExperienceEntry> {
    split_blocks(text)
        .iter()
        .filter_map(|block| parse_experience_block(block))
        .collect()
}

fn parse_experience_block(block: &str) -> Option<ExperienceEntry> {
    let lines = split_lines(block);
    let first = lines.first()?;

    let bullet_start = lines
        .iter()
        .position(|line| is_bullet_line(line))
        .unwrap_or(lines.len());

    let (title, company) = split_title_company(first);

    // A block that opens with a marker contributes its first line as a bullet
    // as well as the title.
    let description = lines.get(1..bullet_start).unwrap_or_default();
    let marked = &lines[bullet_start..];

    let bullets = description
        .iter()
        .chain(marked)
        .map(|line| strip_bullet_marker(line))
        .filter(|bullet| !bullet.is_empty())
        .collect();

    Some(ExperienceEntry {
        title,
        company,
        bullets,
    })
}
