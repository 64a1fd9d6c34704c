//! Advisory input hints. They never block a save or change a stored value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::FieldName;
use crate::parsing::blocks::{split_blocks, split_lines};
use crate::parsing::grammar::split_title_company;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    InvalidEmail,
    MissingCompany,
    MissingSchool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldHint {
    pub kind: HintKind,
    /// 0-based block index for multi-entry fields.
    pub block: Option<usize>,
    pub message: String,
}

pub fn email_looks_valid(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn field_hints(field: Option<FieldName>, value: &str) -> Vec<FieldHint> {
    match field {
        Some(FieldName::Email) if !value.is_empty() && !email_looks_valid(value) => {
            vec![FieldHint {
                kind: HintKind::InvalidEmail,
                block: None,
                message: "Please enter a valid email address.".to_string(),
            }]
        }
        Some(FieldName::Experience) => first_line_hints(value, |first| {
            let (_, company) = split_title_company(first);
            company.is_empty().then(|| {
                (
                    HintKind::MissingCompany,
                    format!("'{first}' has no company; use 'Job Title at Company'"),
                )
            })
        }),
        Some(FieldName::Education) => first_line_hints(value, |first| {
            (!first.contains([',', '\t'])).then(|| {
                (
                    HintKind::MissingSchool,
                    format!("'{first}' has no school; use 'Degree, School'"),
                )
            })
        }),
        _ => vec![],
    }
}

fn first_line_hints<F>(value: &str, check: F) -> Vec<FieldHint>
where
    F: Fn(&str) -> Option<(HintKind, String)>,
{
    split_blocks(value)
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let first = *split_lines(block).first()?;
            let (kind, message) = check(first)?;
            Some(FieldHint {
                kind,
                block: Some(index),
                message,
            })
        })
        .collect()
}
