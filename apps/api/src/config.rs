use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which persistence port backend holds form drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftBackend {
    Memory { ttl_secs: u64 },
    File { dir: PathBuf },
    Redis { url: String, ttl_secs: u64 },
}

/// Application configuration loaded from environment variables.
/// Everything has a default except `REDIS_URL` when the redis backend is chosen.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub draft_backend: DraftBackend,
}

pub const DEFAULT_DRAFT_TTL_SECS: u64 = 7 * 24 * 60 * 60;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            draft_backend: draft_backend_from_env()?,
        })
    }
}

fn draft_backend_from_env() -> Result<DraftBackend> {
    let kind = std::env::var("DRAFT_STORE").unwrap_or_else(|_| "memory".to_string());
    match kind.trim().to_ascii_lowercase().as_str() {
        "memory" => Ok(DraftBackend::Memory {
            ttl_secs: draft_ttl_from_env()?,
        }),
        "file" => Ok(DraftBackend::File {
            dir: std::env::var("DRAFT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./drafts")),
        }),
        "redis" => Ok(DraftBackend::Redis {
            url: require_env("REDIS_URL")?,
            ttl_secs: draft_ttl_from_env()?,
        }),
        other => bail!("DRAFT_STORE must be one of memory, file, redis (got '{other}')"),
    }
}

fn draft_ttl_from_env() -> Result<u64> {
    match std::env::var("DRAFT_TTL_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .context("DRAFT_TTL_SECS must be a whole number of seconds"),
        Err(_) => Ok(DEFAULT_DRAFT_TTL_SECS),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
