use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::drafts::DraftSnapshot;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// PUT /api/v1/drafts/:id
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<DraftSnapshot>, AppError> {
    let snapshot = state.drafts.save(id, &record).await?;
    Ok(Json(snapshot))
}

/// GET /api/v1/drafts/:id
pub async fn handle_load_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DraftSnapshot>, AppError> {
    Ok(Json(state.drafts.load(id).await?))
}

/// DELETE /api/v1/drafts/:id
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.drafts.delete(id).await?;
    info!(draft_id = %id, "draft deleted");
    Ok(StatusCode::NO_CONTENT)
}
