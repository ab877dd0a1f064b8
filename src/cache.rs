//! SQLite-backed snapshot store.
//!
//! Aggregation runs persist their results here so later runs can degrade
//! gracefully when the log tree is missing or GitHub cannot be reached.
//! Snapshots never expire; the newest write for a key wins.

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Snapshot keys understood by the store.
pub mod keys {
    /// Combined local + remote snapshot written by `save`.
    pub const STATS: &str = "stats";
    /// Remote-only snapshot used when GitHub cannot be queried.
    pub const GITHUB_STATS: &str = "github_stats";
}

pub struct SnapshotStore {
    conn: Connection,
}

impl SnapshotStore {
    /// Open (and create) the store at `path` with WAL mode and retry logic
    /// for "database locked" errors.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }

        let mut attempts = 0;
        let max_attempts = 3;

        loop {
            match Connection::open(path) {
                Ok(conn) => {
                    conn.pragma_update(None, "journal_mode", "WAL")?;
                    conn.pragma_update(None, "busy_timeout", 5000)?;
                    init_schema(&conn)?;
                    return Ok(SnapshotStore { conn });
                }
                Err(e) if e.to_string().contains("locked") && attempts < max_attempts => {
                    attempts += 1;
                    thread::sleep(Duration::from_millis(100 * attempts));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read a snapshot by key. Absent keys and unparsable payloads both read
    /// as `None` so callers fall through to zero-valued records.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self
            .conn
            .query_row(
                "SELECT data FROM snapshots WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .ok()
            .flatten()?;

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding unreadable snapshot");
                None
            }
        }
    }

    /// Persist a snapshot, replacing any previous value for the key.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let data = serde_json::to_string(value).context("serialize snapshot")?;
        let now = Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO snapshots (key, data, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            params![key, data, now],
        )?;
        Ok(())
    }
}

/// Resolve the snapshot database path: explicit override first, then the
/// user cache dir.
pub fn default_db_path(override_path: Option<&str>) -> Result<PathBuf> {
    if let Some(p) = override_path {
        let trimmed = p.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }
    let base_dirs = directories::BaseDirs::new().context("failed to find home directory")?;
    Ok(base_dirs.cache_dir().join("nfogen").join("snapshots.db"))
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS snapshots (
            key TEXT PRIMARY KEY,
            data TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        );",
    )?;
    Ok(())
}
