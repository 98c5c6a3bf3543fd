//! Persistent key/value state store.
//!
//! Deira keeps its persisted state as a handful of independent string-keyed
//! blobs (the project catalog JSON, the selected language code, the selected
//! theme name) in a single SQLite `app_state` table. There is exactly one
//! writer — the running app — so no cross-process coordination is needed;
//! the last write wins.

use anyhow::{Context as _, Result};
use chrono::Utc;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::{path::Path, str::FromStr};

/// Stored blob key for the serialized project catalog.
pub const KEY_CATALOG: &str = "custom_projects";
/// Stored blob key for the selected UI language code.
pub const KEY_LANG: &str = "lang";
/// Stored blob key for the selected theme name.
pub const KEY_THEME: &str = "theme";

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open (or create) `{data_dir}/deira.db` and run migrations.
    pub async fn new(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let db_path = data_dir.join("deira.db");
        let opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("src/storage/migrations")
            .run(pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    /// Read a blob. `Ok(None)` when the key has never been written.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM app_state WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(v,)| v))
    }

    /// Write a blob, replacing any previous value for the key.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO app_state (key, value, updated_at) VALUES (?, ?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete a blob. Returns false when the key was absent.
    pub async fn remove(&self, key: &str) -> Result<bool> {
        let rows = sqlx::query("DELETE FROM app_state WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows > 0)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    async fn make_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path()).await.unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let (_dir, s) = make_storage().await;
        assert_eq!(s.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let (_dir, s) = make_storage().await;
        s.set(KEY_LANG, "en").await.unwrap();
        assert_eq!(s.get(KEY_LANG).await.unwrap().as_deref(), Some("en"));
        // Overwrite
        s.set(KEY_LANG, "fr").await.unwrap();
        assert_eq!(s.get(KEY_LANG).await.unwrap().as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn test_remove() {
        let (_dir, s) = make_storage().await;
        s.set(KEY_THEME, "dark").await.unwrap();
        assert!(s.remove(KEY_THEME).await.unwrap());
        assert_eq!(s.get(KEY_THEME).await.unwrap(), None);
        // Removing again is a no-op
        assert!(!s.remove(KEY_THEME).await.unwrap());
    }

    #[tokio::test]
    async fn test_reopen_preserves_state() {
        let dir = tempfile::tempdir().unwrap();
        {
            let s = Storage::new(dir.path()).await.unwrap();
            s.set(KEY_CATALOG, "[]").await.unwrap();
        }
        let s = Storage::new(dir.path()).await.unwrap();
        assert_eq!(s.get(KEY_CATALOG).await.unwrap().as_deref(), Some("[]"));
    }
}
