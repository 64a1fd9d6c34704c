//! Named size presets mapped to the fixed typographic tokens the templates
//! consume. Token values are utility-class names understood by the front end.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreset {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub body: &'static str,
    pub small: &'static str,
    pub line_height: &'static str,
    pub letter_spacing: &'static str,
    pub section_margin: &'static str,
    pub item_margin: &'static str,
    pub section_padding: &'static str,
    pub border_radius: &'static str,
}

static SMALL: Typography = Typography {
    heading: "text-xl font-bold",
    subheading: "text-base font-semibold",
    body: "text-sm",
    small: "text-xs",
    line_height: "leading-snug",
    letter_spacing: "tracking-normal",
    section_margin: "mb-3",
    item_margin: "mb-1.5",
    section_padding: "p-2",
    border_radius: "rounded",
};

static MEDIUM: Typography = Typography {
    heading: "text-2xl font-bold",
    subheading: "text-lg font-semibold",
    body: "text-base",
    small: "text-sm",
    line_height: "leading-normal",
    letter_spacing: "tracking-normal",
    section_margin: "mb-4",
    item_margin: "mb-2",
    section_padding: "p-3",
    border_radius: "rounded-md",
};

static LARGE: Typography = Typography {
    heading: "text-3xl font-bold",
    subheading: "text-xl font-semibold",
    body: "text-lg",
    small: "text-base",
    line_height: "leading-relaxed",
    letter_spacing: "tracking-wide",
    section_margin: "mb-6",
    item_margin: "mb-3",
    section_padding: "p-4",
    border_radius: "rounded-lg",
};

impl SizePreset {
    pub fn typography(self) -> &'static Typography {
        match self {
            SizePreset::Small => &SMALL,
            SizePreset::Medium => &MEDIUM,
            SizePreset::Large => &LARGE,
        }
    }
}
