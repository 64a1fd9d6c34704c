//! Structured-entry formatter: guided items -> canonical flat text.
//!
//! Output follows the block/line/delimiter grammar in `crate::parsing`, so
//! re-parsing a flattened field yields the same grouping the user built.
//! Multi-line free text inside an item (descriptions, notes, achievements)
//! has its blank lines removed; otherwise one item would split into several
//! blocks on the way back. Single-line item fields (titles, companies,
//! dates, skill names) are collapsed to one line for the same reason.

use crate::guided::session::{
    CertificationItem, EditingSession, EducationItem, ExperienceItem, LanguageItem, ProjectItem,
    TextItem,
};
use crate::models::resume::ResumeRecord;
use crate::parsing::normalize::normalize_whitespace as line;

const BLOCK_SEPARATOR: &str = "\n\n";
const LIST_SEPARATOR: &str = ", ";

/// Non-blank lines of `text`, trimmed, rejoined with single newlines.
fn compact_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// ` (<start> - <end>)`, ` (<start> - Present)`, ` (<start>)` or nothing.
/// An explicit end date wins over the `current` flag.
fn format_period(start: &str, end: &str, current: bool) -> String {
    let (start, end) = (line(start), line(end));
    if start.is_empty() && end.is_empty() {
        return String::new();
    }
    let tail = if !end.is_empty() {
        format!(" - {end}")
    } else if current {
        " - Present".to_string()
    } else {
        String::new()
    };
    format!(" ({start}{tail})")
}

pub fn format_experience(item: &ExperienceItem) -> String {
    format!(
        "{} at {}{}\n{}",
        line(&item.title),
        line(&item.company),
        format_period(&item.start_date, &item.end_date, item.current),
        compact_lines(&item.description)
    )
}

pub fn format_education(item: &EducationItem) -> String {
    let mut out = format!(
        "{}, {}{}",
        line(&item.degree),
        line(&item.school),
        format_period(&item.start_date, &item.end_date, item.current)
    );
    let gpa = line(&item.gpa);
    if !gpa.is_empty() {
        out.push_str(&format!("\nGPA: {gpa}"));
    }
    let notes = compact_lines(&item.notes);
    if !notes.is_empty() {
        out.push('\n');
        out.push_str(&notes);
    }
    out
}

pub fn format_certification(item: &CertificationItem) -> String {
    let mut out = line(&item.name);
    let issuer = line(&item.issuer);
    if !issuer.is_empty() {
        out.push_str(&format!(" - {issuer}"));
    }
    let date = line(&item.date);
    if !date.is_empty() {
        out.push_str(&format!(" ({date})"));
    }
    let expiry = line(&item.expiry_date);
    if !expiry.is_empty() {
        out.push_str(&format!(" - Expires: {expiry}"));
    }
    out
}

pub fn format_project(item: &ProjectItem) -> String {
    let mut out = format!("{}\n{}", line(&item.title), compact_lines(&item.description));
    let technologies = line(&item.technologies);
    if !technologies.is_empty() {
        out.push_str(&format!("\nTechnologies: {technologies}"));
    }
    let link = line(&item.link);
    if !link.is_empty() {
        out.push_str(&format!("\nLink: {link}"));
    }
    out
}

pub fn format_language(item: &LanguageItem) -> String {
    format!("{} ({})", line(&item.language), line(&item.proficiency))
}

fn join_with<T>(items: &[T], separator: &str, format: impl Fn(&T) -> String) -> String {
    items.iter().map(format).collect::<Vec<_>>().join(separator)
}

/// Flattens the whole session into a `ResumeRecord`.
///
/// Skill categories are merged into one list here; the flat `skills` field
/// has no place to keep them. `EditingSession::skill_groups` still has them.
pub fn flatten(session: &EditingSession) -> ResumeRecord {
    let text = |item: &TextItem| compact_lines(&item.text);

    ResumeRecord {
        name: session.name.clone(),
        email: session.email.clone(),
        phone: session.phone.clone(),
        linkedin: session.linkedin.clone(),
        summary: session.summary.clone(),
        profile_image: session.profile_image.clone(),
        experience: join_with(&session.experiences, BLOCK_SEPARATOR, format_experience),
        education: join_with(&session.education, BLOCK_SEPARATOR, format_education),
        skills: session
            .technical_skills
            .iter()
            .chain(&session.non_technical_skills)
            .map(|skill| line(&skill.text))
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        certifications: join_with(&session.certifications, "\n", format_certification),
        projects: join_with(&session.projects, BLOCK_SEPARATOR, format_project),
        achievements: join_with(&session.achievements, BLOCK_SEPARATOR, text),
        languages: join_with(&session.languages, LIST_SEPARATOR, format_language),
        interests: join_with(&session.interests, LIST_SEPARATOR, |item: &TextItem| {
            line(&item.text)
        }),
    }
}
