use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::drafts::autosave;
use crate::errors::AppError;
use crate::guided::{flatten, EditingSession, GuidedAction};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    #[serde(default)]
    pub session: EditingSession,
    pub action: GuidedAction,
    /// When set, the flattened record is autosaved under this id.
    pub draft_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub session: EditingSession,
    pub record: ResumeRecord,
    pub changed: bool,
    /// False only when autosave was requested and the store failed.
    pub saved: bool,
}

/// POST /api/v1/guided/apply
///
/// Applies one add/remove/set action and returns the new session with its
/// flat record. A failing draft store is logged and reported in `saved`, it
/// never fails the request.
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(req): Json<ApplyRequest>,
) -> Result<Json<ApplyResponse>, AppError> {
    let mut session = req.session;
    let changed = session.apply(req.action);
    let record = flatten(&session);

    let saved = match req.draft_id {
        Some(id) => autosave(state.drafts.as_ref(), id, &record).await.is_some(),
        None => true,
    };
    debug!(changed, saved, "guided action applied");

    Ok(Json(ApplyResponse {
        session,
        record,
        changed,
        saved,
    }))
}

/// POST /api/v1/guided/flatten
pub async fn handle_flatten(Json(session): Json<EditingSession>) -> Json<ResumeRecord> {
    Json(flatten(&session))
}
