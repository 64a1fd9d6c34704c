//! Delimiter-separated lists: skills, languages, interests, certifications.

use serde::{Deserialize, Serialize};

const LIST_DELIMITERS: [char; 3] = [',', ';', '\n'];

/// Splits on any mixture of comma, semicolon and newline, trims every piece,
/// and drops the empty ones. Input order is preserved.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(LIST_DELIMITERS.as_slice())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// True when `token` survives `parse_list` as exactly one item: non-blank
/// and free of list delimiters.
pub fn is_list_token(token: &str) -> bool {
    !token.trim().is_empty() && !token.contains(LIST_DELIMITERS.as_slice())
}

/// Canonical stored form of a list field.
pub fn join_list(tokens: &[String]) -> String {
    tokens.join(", ")
}

/// One certification per non-blank line.
pub fn parse_certifications(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Skills split into the two display columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroups {
    pub technical: Vec<String>,
    pub non_technical: Vec<String>,
}

/// Positional split: the first `ceil(n / 2)` tokens are treated as technical,
/// the rest as non-technical.
///
/// The flat `skills` field does not record which category a skill came from,
/// so this is a guess. Callers holding a guided session should use
/// `EditingSession::skill_groups` instead.
pub fn split_skills_by_position(tokens: &[String]) -> SkillGroups {
    let pivot = tokens.len().div_ceil(2);
    SkillGroups {
        technical: tokens[..pivot].to_vec(),
        non_technical: tokens[pivot..].to_vec(),
    }
}
