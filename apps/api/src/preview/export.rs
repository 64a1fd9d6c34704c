use crate::parsing::normalize::WHITESPACE_RUN;

/// Element id the export collaborator looks up to find the rendered resume.
pub const PREVIEW_ELEMENT_ID: &str = "resume-preview";

const FALLBACK_STEM: &str = "resume";

/// `<name with whitespace runs as underscores>.pdf`, or `resume.pdf` when the
/// name is blank.
pub fn export_file_name(name: &str) -> String {
    let stem = if name.trim().is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        WHITESPACE_RUN.replace_all(name, "_").into_owned()
    };
    format!("{stem}.pdf")
}
