use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::{FieldName, ResumeRecord};
use crate::parsing::blur::normalize_field;
use crate::parsing::hints::{field_hints, FieldHint};
use crate::parsing::{parse_record, ParsedResume};

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub field: String,
    pub value: String,
    pub hints: Vec<FieldHint>,
}

/// POST /api/v1/fields/normalize
///
/// Blur-time canonicalisation. Unknown field names are accepted and only get
/// leading whitespace trimmed.
pub async fn handle_normalize(
    Json(req): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, AppError> {
    if req.field.trim().is_empty() {
        return Err(AppError::Validation("field cannot be empty".to_string()));
    }

    let field = FieldName::parse(&req.field);
    let value = normalize_field(field, &req.value);
    let hints = field_hints(field, &value);

    Ok(Json(NormalizeResponse {
        field: req.field,
        value,
        hints,
    }))
}

/// POST /api/v1/resume/parse
pub async fn handle_parse(Json(record): Json<ResumeRecord>) -> Json<ParsedResume> {
    Json(parse_record(&record))
}
