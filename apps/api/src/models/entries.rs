//! Structured entities derived from one `ResumeRecord` field per parse call.
//! Never stored; recomputed from the flat text every time.

use serde::{Deserialize, Serialize};

/// One block of the `experience` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub bullets: Vec<String>,
}

/// One block of the `education` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub notes: Vec<String>,
}

/// One block of the `projects` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub bullets: Vec<String>,
}
