//! Draft persistence port.
//!
//! The form autosaves the flat `ResumeRecord` on every change. Callers only
//! see the `DraftStore` trait; the backend (memory, file, redis) is picked at
//! startup from config. A failing store must never break parsing or
//! rendering, which is what `autosave` guarantees.

pub mod file;
pub mod handlers;
pub mod memory;
pub mod redis_store;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::DraftBackend;
use crate::models::resume::ResumeRecord;

pub use file::FileDraftStore;
pub use memory::InMemoryDraftStore;
pub use redis_store::RedisDraftStore;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Draft {0} not found")]
    NotFound(Uuid),
}

/// A saved copy of the form at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub id: Uuid,
    pub record: ResumeRecord,
    pub saved_at: DateTime<Utc>,
}

impl DraftSnapshot {
    pub fn now(id: Uuid, record: &ResumeRecord) -> Self {
        DraftSnapshot {
            id,
            record: record.clone(),
            saved_at: Utc::now(),
        }
    }
}

/// The persistence port. Implement this to add a storage medium without
/// touching handlers. Carried in `AppState` as `Arc<dyn DraftStore>`.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Overwrites any previous draft with the same id.
    async fn save(&self, id: Uuid, record: &ResumeRecord) -> Result<DraftSnapshot, DraftStoreError>;

    /// `DraftStoreError::NotFound` when nothing is stored under `id`.
    async fn load(&self, id: Uuid) -> Result<DraftSnapshot, DraftStoreError>;

    /// `DraftStoreError::NotFound` when nothing is stored under `id`.
    async fn delete(&self, id: Uuid) -> Result<(), DraftStoreError>;

    /// Short backend name for logs and `/health`.
    fn backend(&self) -> &'static str;
}

/// Saves a draft, logging and swallowing any failure.
pub async fn autosave(
    store: &dyn DraftStore,
    id: Uuid,
    record: &ResumeRecord,
) -> Option<DraftSnapshot> {
    match store.save(id, record).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(draft_id = %id, backend = store.backend(), "autosave failed: {e}");
            None
        }
    }
}

/// Builds the configured backend.
pub async fn build_draft_store(backend: &DraftBackend) -> Result<Arc<dyn DraftStore>> {
    let store: Arc<dyn DraftStore> = match backend {
        DraftBackend::Memory { ttl_secs } => Arc::new(InMemoryDraftStore::new(*ttl_secs)),
        DraftBackend::File { dir } => Arc::new(FileDraftStore::new(dir.clone())),
        DraftBackend::Redis { url, ttl_secs } => {
            Arc::new(RedisDraftStore::connect(url, *ttl_secs).await?)
        }
    };
    info!("Draft store initialized (backend: {})", store.backend());
    Ok(store)
}
