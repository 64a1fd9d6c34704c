use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tracing::{debug, info};
use uuid::Uuid;

use crate::drafts::{DraftSnapshot, DraftStore, DraftStoreError};
use crate::models::resume::ResumeRecord;

const KEY_PREFIX: &str = "resume:draft:";

/// Drafts stored as JSON strings with an expiry, so abandoned forms age out.
pub struct RedisDraftStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisDraftStore {
    pub async fn connect(url: &str, ttl_secs: u64) -> Result<Self, DraftStoreError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis draft store connected (ttl {ttl_secs}s)");
        Ok(RedisDraftStore { conn, ttl_secs })
    }
}

fn draft_key(id: Uuid) -> String {
    format!("{KEY_PREFIX}{id}")
}

#[async_trait]
impl DraftStore for RedisDraftStore {
    async fn save(&self, id: Uuid, record: &ResumeRecord) -> Result<DraftSnapshot, DraftStoreError> {
        let snapshot = DraftSnapshot::now(id, record);
        let json = serde_json::to_string(&snapshot)?;
        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(draft_key(id))
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        debug!(draft_id = %id, "draft written to redis");
        Ok(snapshot)
    }

    async fn load(&self, id: Uuid) -> Result<DraftSnapshot, DraftStoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = redis::cmd("GET")
            .arg(draft_key(id))
            .query_async(&mut conn)
            .await?;
        let raw = raw.ok_or(DraftStoreError::NotFound(id))?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DraftStoreError> {
        let mut conn = self.conn.clone();
        let removed: i64 = redis::cmd("DEL")
            .arg(draft_key(id))
            .query_async(&mut conn)
            .await?;
        if removed == 0 {
            return Err(DraftStoreError::NotFound(id));
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
