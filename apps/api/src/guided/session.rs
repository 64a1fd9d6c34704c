//! Editing-session state for guided entry.
//!
//! The whole session is one serializable value. The client sends it back
//! with each action, so the formatter stays a pure function of a snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::resume::FieldName;
use crate::parsing::{is_list_token, SkillGroups};

// ────────────────────────────────────────────────────────────────────────────
// Items
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// Still in the role; renders as "Present" when no end date is given.
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub id: Uuid,
    pub degree: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub gpa: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationItem {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub start_date: String,
    pub end_date: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageItem {
    pub id: Uuid,
    pub language: String,
    pub proficiency: String,
}

/// Skills, interests and achievements: a single piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    pub id: Uuid,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Session + actions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSession {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub profile_image: String,
    pub experiences: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub technical_skills: Vec<TextItem>,
    pub non_technical_skills: Vec<TextItem>,
    pub certifications: Vec<CertificationItem>,
    pub projects: Vec<ProjectItem>,
    pub achievements: Vec<TextItem>,
    pub languages: Vec<LanguageItem>,
    pub interests: Vec<TextItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    TechnicalSkill,
    NonTechnicalSkill,
    Certification,
    Project,
    Achievement,
    Language,
    Interest,
}

/// An item to append. Ids are assigned by the session, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", content = "item", rename_all = "snake_case")]
pub enum NewItem {
    Experience(ExperienceItem),
    Education(EducationItem),
    TechnicalSkill(String),
    NonTechnicalSkill(String),
    Certification(CertificationItem),
    Project(ProjectItem),
    Achievement(String),
    Language(LanguageItem),
    Interest(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GuidedAction {
    Add { item: NewItem },
    Remove { section: Section, id: Uuid },
    /// Basic scalar fields and the profile image. List sections are ignored.
    SetField { field: FieldName, value: String },
}

fn present(s: &str) -> bool {
    !s.trim().is_empty()
}

fn text_item(text: &str) -> Option<TextItem> {
    present(text).then(|| TextItem {
        id: Uuid::new_v4(),
        text: text.trim().to_string(),
    })
}

fn remove_by_id<T>(items: &mut Vec<T>, id: Uuid, item_id: impl Fn(&T) -> Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item_id(item) != id);
    items.len() != before
}

impl EditingSession {
    /// Applies one action. Returns `false` when the session is unchanged,
    /// either because an add was missing required fields or a remove matched
    /// nothing.
    pub fn apply(&mut self, action: GuidedAction) -> bool {
        match action {
            GuidedAction::Add { item } => self.add(item),
            GuidedAction::Remove { section, id } => self.remove(section, id),
            GuidedAction::SetField { field, value } => self.set_field(field, value),
        }
    }

    fn add(&mut self, item: NewItem) -> bool {
        let added = match item {
            NewItem::Experience(mut exp) => {
                let ok = present(&exp.title) && present(&exp.company);
                if ok {
                    exp.id = Uuid::new_v4();
                    self.experiences.push(exp);
                }
                ok
            }
            NewItem::Education(mut edu) => {
                let ok = present(&edu.degree) && present(&edu.school);
                if ok {
                    edu.id = Uuid::new_v4();
                    self.education.push(edu);
                }
                ok
            }
            NewItem::Certification(mut cert) => {
                let ok = present(&cert.name);
                if ok {
                    cert.id = Uuid::new_v4();
                    self.certifications.push(cert);
                }
                ok
            }
            NewItem::Project(mut proj) => {
                let ok = present(&proj.title) && present(&proj.description);
                if ok {
                    proj.id = Uuid::new_v4();
                    self.projects.push(proj);
                }
                ok
            }
            NewItem::Language(mut lang) => {
                let ok = is_list_token(&lang.language) && is_list_token(&lang.proficiency);
                if ok {
                    lang.id = Uuid::new_v4();
                    self.languages.push(lang);
                }
                ok
            }
            NewItem::TechnicalSkill(text) => push_token(&mut self.technical_skills, &text),
            NewItem::NonTechnicalSkill(text) => push_token(&mut self.non_technical_skills, &text),
            NewItem::Achievement(text) => push_text(&mut self.achievements, &text),
            NewItem::Interest(text) => push_token(&mut self.interests, &text),
        };
        if !added {
            debug!("guided add rejected: required fields missing or list delimiter in text");
        }
        added
    }

    fn remove(&mut self, section: Section, id: Uuid) -> bool {
        match section {
            Section::Experience => remove_by_id(&mut self.experiences, id, |i| i.id),
            Section::Education => remove_by_id(&mut self.education, id, |i| i.id),
            Section::TechnicalSkill => remove_by_id(&mut self.technical_skills, id, |i| i.id),
            Section::NonTechnicalSkill => {
                remove_by_id(&mut self.non_technical_skills, id, |i| i.id)
            }
            Section::Certification => remove_by_id(&mut self.certifications, id, |i| i.id),
            Section::Project => remove_by_id(&mut self.projects, id, |i| i.id),
            Section::Achievement => remove_by_id(&mut self.achievements, id, |i| i.id),
            Section::Language => remove_by_id(&mut self.languages, id, |i| i.id),
            Section::Interest => remove_by_id(&mut self.interests, id, |i| i.id),
        }
    }

    fn set_field(&mut self, field: FieldName, value: String) -> bool {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Linkedin => &mut self.linkedin,
            FieldName::Summary => &mut self.summary,
            FieldName::ProfileImage => &mut self.profile_image,
            other => {
                debug!(field = other.as_str(), "guided set_field ignored for list section");
                return false;
            }
        };
        *slot = value;
        true
    }

    /// Skills with their category intact, unlike the flat `skills` field.
    pub fn skill_groups(&self) -> SkillGroups {
        let texts = |items: &[TextItem]| -> Vec<String> {
            items.iter().map(|i| i.text.clone()).collect()
        };
        SkillGroups {
            technical: texts(&self.technical_skills),
            non_technical: texts(&self.non_technical_skills),
        }
    }
}

fn push_text(items: &mut Vec<TextItem>, text: &str) -> bool {
    match text_item(text) {
        Some(item) => {
            items.push(item);
            true
        }
        None => false,
    }
}

/// Items that end up in a comma-joined field must not carry delimiters,
/// or they would come back as several tokens.
fn push_token(items: &mut Vec<TextItem>, text: &str) -> bool {
    is_list_token(text) && push_text(items, text)
}
