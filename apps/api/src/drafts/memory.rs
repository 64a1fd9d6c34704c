use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::config::DEFAULT_DRAFT_TTL_SECS;
use crate::drafts::{DraftSnapshot, DraftStore, DraftStoreError};
use crate::models::resume::ResumeRecord;

/// Process-local drafts. Lost on restart; the default backend.
///
/// Snapshots expire `ttl_secs` after their last save, like the redis backend.
/// Expired entries read as missing and are dropped on the next save.
pub struct InMemoryDraftStore {
    drafts: RwLock<HashMap<Uuid, DraftSnapshot>>,
    ttl_secs: i64,
}

impl InMemoryDraftStore {
    pub fn new(ttl_secs: u64) -> Self {
        InMemoryDraftStore {
            drafts: RwLock::new(HashMap::new()),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    fn is_expired(&self, snapshot: &DraftSnapshot) -> bool {
        Utc::now()
            .signed_duration_since(snapshot.saved_at)
            .num_seconds()
            >= self.ttl_secs
    }
}

impl Default for InMemoryDraftStore {
    fn default() -> Self {
        Self::new(DEFAULT_DRAFT_TTL_SECS)
    }
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn save(&self, id: Uuid, record: &ResumeRecord) -> Result<DraftSnapshot, DraftStoreError> {
        let mut drafts = self.drafts.write().await;
        let before = drafts.len();
        drafts.retain(|_, snapshot| !self.is_expired(snapshot));
        if drafts.len() != before {
            debug!(purged = before - drafts.len(), "expired in-memory drafts dropped");
        }

        let snapshot = DraftSnapshot::now(id, record);
        drafts.insert(id, snapshot.clone());
        Ok(snapshot)
    }

    async fn load(&self, id: Uuid) -> Result<DraftSnapshot, DraftStoreError> {
        self.drafts
            .read()
            .await
            .get(&id)
            .filter(|snapshot| !self.is_expired(snapshot))
            .cloned()
            .ok_or(DraftStoreError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DraftStoreError> {
        self.drafts
            .write()
            .await
            .remove(&id)
            .filter(|snapshot| !self.is_expired(snapshot))
            .map(|_| ())
            .ok_or(DraftStoreError::NotFound(id))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load() {
        let store = InMemoryDraftStore::default();
        let id = Uuid::new_v4();
        let record = ResumeRecord {
            skills: "Rust, Go".to_string(),
            ..Default::default()
        };
        store.save(id, &record).await.unwrap();
        assert_eq!(store.load(id).await.unwrap().record, record);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = InMemoryDraftStore::default();
        let id = Uuid::new_v4();
        store.save(id, &ResumeRecord::default()).await.unwrap();
        let newer = ResumeRecord {
            name: "Second".to_string(),
            ..Default::default()
        };
        store.save(id, &newer).await.unwrap();
        assert_eq!(store.load(id).await.unwrap().record.name, "Second");
    }

    #[tokio::test]
    async fn test_missing_and_deleted_drafts() {
        let store = InMemoryDraftStore::default();
        let id = Uuid::new_v4();
        assert!(matches!(store.load(id).await, Err(DraftStoreError::NotFound(_))));
        store.save(id, &ResumeRecord::default()).await.unwrap();
        store.delete(id).await.unwrap();
        assert!(matches!(store.delete(id).await, Err(DraftStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_expired_drafts_read_as_missing_and_are_purged() {
        let store = InMemoryDraftStore::new(0);
        let stale = Uuid::new_v4();
        store.save(stale, &ResumeRecord::default()).await.unwrap();
        assert!(matches!(store.load(stale).await, Err(DraftStoreError::NotFound(_))));

        store.save(Uuid::new_v4(), &ResumeRecord::default()).await.unwrap();
        let held = store.drafts.read().await;
        assert!(!held.contains_key(&stale));
        assert_eq!(held.len(), 1);
    }

    #[tokio::test]
    async fn test_long_ttl_keeps_drafts() {
        let store = InMemoryDraftStore::new(u64::MAX);
        let id = Uuid::new_v4();
        store.save(id, &ResumeRecord::default()).await.unwrap();
        assert!(store.load(id).await.is_ok());
    }
}
