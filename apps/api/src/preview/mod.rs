// Interface to the presentation and export collaborators.
// Layout, colours and PDF generation live outside this service; this module
// only hands them parsed sections, typography tokens and a file name.

pub mod export;
pub mod handlers;
pub mod typography;

pub use export::{export_file_name, PREVIEW_ELEMENT_ID};
pub use typography::{SizePreset, Typography};
