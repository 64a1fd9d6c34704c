//! Field-level canonicalisation applied when an input loses focus.

use crate::models::resume::FieldName;
use crate::parsing::blocks::split_blocks;
use crate::parsing::list::{join_list, parse_list};
use crate::parsing::normalize::{normalize_line_endings, normalize_whitespace};

/// Returns the canonical stored form of `value` for `field`. Unknown fields
/// (`None`) get the same treatment as the contact fields. Every rule is
/// idempotent.
pub fn normalize_field(field: Option<FieldName>, value: &str) -> String {
    match field {
        Some(FieldName::Skills | FieldName::Languages | FieldName::Interests) => {
            join_list(&parse_list(value))
        }
        Some(FieldName::Achievements | FieldName::Projects) => split_blocks(value).join("\n\n"),
        Some(FieldName::Experience | FieldName::Education) => normalize_line_endings(value),
        Some(FieldName::Summary | FieldName::Certifications) => normalize_whitespace(value),
        _ => value.trim_start().to_string(),
    }
}
