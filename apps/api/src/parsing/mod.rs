// Free-text resume parsing engine.
// Every function here is pure and total: malformed input degrades to a
// best-effort structure, never an error.

pub mod blocks;
pub mod blur;
pub mod education;
pub mod experience;
pub mod grammar;
pub mod handlers;
pub mod hints;
pub mod list;
pub mod normalize;
pub mod projects;

use serde::{Deserialize, Serialize};

use crate::models::entries::{EducationEntry, ExperienceEntry, ProjectEntry};
use crate::models::resume::ResumeRecord;

pub use education::parse_education;
pub use experience::parse_experience;
pub use list::{
    is_list_token, parse_certifications, parse_list, split_skills_by_position, SkillGroups,
};
pub use projects::{parse_achievements, parse_projects};

/// Everything the presentation layer needs for one render pass. Built fresh
/// from a `ResumeRecord` and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub profile_image: String,
    pub skills: Vec<String>,
    pub skill_groups: SkillGroups,
    pub languages: Vec<String>,
    pub interests: Vec<String>,
    pub certifications: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<String>,
}

/// Runs every parser over its field. Scalar fields are copied as-is.
pub fn parse_record(record: &ResumeRecord) -> ParsedResume {
    let skills = parse_list(&record.skills);
    let skill_groups = split_skills_by_position(&skills);

    ParsedResume {
        name: record.name.clone(),
        email: record.email.clone(),
        phone: record.phone.clone(),
        linkedin: record.linkedin.clone(),
        summary: record.summary.clone(),
        profile_image: record.profile_image.clone(),
        skills,
        skill_groups,
        languages: parse_list(&record.languages),
        interests: parse_list(&record.interests),
        certifications: parse_certifications(&record.certifications),
        experience: parse_experience(&record.experience),
        education: parse_education(&record.education),
        projects: parse_projects(&record.projects),
        achievements: parse_achievements(&record.achievements),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_parses_to_empty_sections() {
        assert_eq!(parse_record(&ResumeRecord::default()), ParsedResume::default());
    }

    #[test]
    fn test_record_sections_are_routed_to_their_parsers() {
        let record = ResumeRecord {
            name: "Jane Doe".to_string(),
            skills: "Rust, Go, Leadership".to_string(),
            languages: "English (Native)".to_string(),
            certifications: "CKA\nAWS SA".to_string(),
            experience: "Dev at Acme\n- Built X".to_string(),
            education: "B.S., MIT".to_string(),
            projects: "Tool\n- Fast".to_string(),
            achievements: "Award A\n\nAward B".to_string(),
            ..Default::default()
        };
        let parsed = parse_record(&record);
        assert_eq!(parsed.name, "Jane Doe");
        assert_eq!(parsed.skills.len(), 3);
        assert_eq!(parsed.skill_groups.technical, vec!["Rust", "Go"]);
        assert_eq!(parsed.languages, vec!["English (Native)"]);
        assert_eq!(parsed.certifications, vec!["CKA", "AWS SA"]);
        assert_eq!(parsed.experience[0].company, "Acme");
        assert_eq!(parsed.education[0].school, "MIT");
        assert_eq!(parsed.projects[0].bullets, vec!["Fast"]);
        assert_eq!(parsed.achievements.len(), 2);
    }

    #[test]
    fn test_parsing_is_stable_across_calls() {
        let record = ResumeRecord {
            experience: "A at B\nline\n- x\n\n\nC".to_string(),
            ..Default::default()
        };
        assert_eq!(parse_record(&record), parse_record(&record));
    }
}
