use serde::{Deserialize, Serialize};

/// The one persisted unit: every field is a flat string, structure is
/// re-derived by the parsers on demand. Missing fields deserialize as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub skills: String,
    pub languages: String,
    pub interests: String,
    pub certifications: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub achievements: String,
    /// Opaque embedded image reference (usually a data URI) or empty.
    #[serde(rename = "profileImage")]
    pub profile_image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Linkedin,
    Summary,
    Skills,
    Languages,
    Interests,
    Certifications,
    Education,
    Experience,
    Projects,
    Achievements,
    #[serde(rename = "profileImage")]
    ProfileImage,
}

impl FieldName {
    pub const ALL: [FieldName; 14] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Linkedin,
        FieldName::Summary,
        FieldName::Skills,
        FieldName::Languages,
        FieldName::Interests,
        FieldName::Certifications,
        FieldName::Education,
        FieldName::Experience,
        FieldName::Projects,
        FieldName::Achievements,
        FieldName::ProfileImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Linkedin => "linkedin",
            FieldName::Summary => "summary",
            FieldName::Skills => "skills",
            FieldName::Languages => "languages",
            FieldName::Interests => "interests",
            FieldName::Certifications => "certifications",
            FieldName::Education => "education",
            FieldName::Experience => "experience",
            FieldName::Projects => "projects",
            FieldName::Achievements => "achievements",
            FieldName::ProfileImage => "profileImage",
        }
    }

    /// Looks up a field by its wire name. Returns `None` for names the
    /// record does not carry.
    pub fn parse(name: &str) -> Option<FieldName> {
        FieldName::ALL.into_iter().find(|f| f.as_str() == name)
    }
}
