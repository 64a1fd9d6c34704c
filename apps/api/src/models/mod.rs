pub mod entries;
pub mod resume;
