use std::sync::Arc;

use crate::drafts::DraftStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence port for form drafts. Backend chosen by `DRAFT_STORE`.
    pub drafts: Arc<dyn DraftStore>,
}
