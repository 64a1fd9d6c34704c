use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::drafts::{DraftSnapshot, DraftStore, DraftStoreError};
use crate::models::resume::ResumeRecord;

/// One pretty-printed JSON file per draft: `<dir>/<id>.json`.
/// Every write goes to its own temp file and is renamed into place, so a
/// crash or an overlapping save of the same id never leaves a half-written
/// draft behind. Concurrent saves resolve last-rename-wins.
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: PathBuf) -> Self {
        FileDraftStore { dir }
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

fn not_found_as(id: Uuid) -> impl Fn(std::io::Error) -> DraftStoreError {
    move |e| match e.kind() {
        ErrorKind::NotFound => DraftStoreError::NotFound(id),
        _ => DraftStoreError::Io(e),
    }
}

#[async_trait]
impl DraftStore for FileDraftStore {
    async fn save(&self, id: Uuid, record: &ResumeRecord) -> Result<DraftSnapshot, DraftStoreError> {
        let snapshot = DraftSnapshot::now(id, record);
        let json = serde_json::to_vec_pretty(&snapshot)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(id);
        let tmp = self.dir.join(format!("{id}.{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!(draft_id = %id, path = %path.display(), "draft written");
        Ok(snapshot)
    }

    async fn load(&self, id: Uuid) -> Result<DraftSnapshot, DraftStoreError> {
        let bytes = tokio::fs::read(self.path_for(id))
            .await
            .map_err(not_found_as(id))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DraftStoreError> {
        tokio::fs::remove_file(self.path_for(id))
            .await
            .map_err(not_found_as(id))
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().join("nested"));
        let id = Uuid::new_v4();
        let record = ResumeRecord {
            experience: "Dev at Acme\n- Built X".to_string(),
            profile_image: "data:image/png;base64,AA==".to_string(),
            ..Default::default()
        };

        let saved = store.save(id, &record).await.unwrap();
        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded, saved);
        assert!(dir.path().join("nested").join(format!("{id}.json")).exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf());
        let id = Uuid::new_v4();
        assert!(matches!(store.load(id).await, Err(DraftStoreError::NotFound(got)) if got == id));
        assert!(matches!(store.delete(id).await, Err(DraftStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf());
        let id = Uuid::new_v4();
        std::fs::write(dir.path().join(format!("{id}.json")), b"{not json").unwrap();
        assert!(matches!(
            store.load(id).await,
            Err(DraftStoreError::Serialization(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_overlapping_saves_of_one_draft_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(FileDraftStore::new(dir.path().to_path_buf()));
        let id = Uuid::new_v4();

        for round in 0..10 {
            let writers: Vec<_> = (0..16)
                .map(|n| {
                    let store = store.clone();
                    tokio::spawn(async move {
                        let record = ResumeRecord {
                            summary: "x".repeat((n * 97 + round) % 600),
                            ..Default::default()
                        };
                        store.save(id, &record).await
                    })
                })
                .collect();
            for writer in writers {
                writer.await.unwrap().unwrap();
            }
            store.load(id).await.unwrap();
        }

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers.len(), 1, "stray files: {leftovers:?}");
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDraftStore::new(dir.path().to_path_buf());
        let id = Uuid::new_v4();
        store.save(id, &ResumeRecord::default()).await.unwrap();
        store.delete(id).await.unwrap();
        assert!(matches!(store.load(id).await, Err(DraftStoreError::NotFound(_))));
    }
}
