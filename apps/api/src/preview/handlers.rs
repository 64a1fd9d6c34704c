use axum::Json;
use serde::{Deserialize, Serialize};

use crate::guided::EditingSession;
use crate::models::resume::ResumeRecord;
use crate::parsing::{parse_record, ParsedResume};
use crate::preview::{export_file_name, SizePreset, Typography, PREVIEW_ELEMENT_ID};

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub record: ResumeRecord,
    #[serde(default)]
    pub size: SizePreset,
    /// Guided session, if the form has one. Its skill categories replace the
    /// positional split of the flat skills field.
    pub session: Option<EditingSession>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub resume: ParsedResume,
    pub size: SizePreset,
    pub typography: &'static Typography,
    pub element_id: &'static str,
    pub file_name: String,
}

/// POST /api/v1/resume/preview
pub async fn handle_preview(Json(req): Json<PreviewRequest>) -> Json<PreviewResponse> {
    let mut resume = parse_record(&req.record);
    if let Some(session) = &req.session {
        resume.skill_groups = session.skill_groups();
    }

    Json(PreviewResponse {
        file_name: export_file_name(&resume.name),
        resume,
        size: req.size,
        typography: req.size.typography(),
        element_id: PREVIEW_ELEMENT_ID,
    })
}
