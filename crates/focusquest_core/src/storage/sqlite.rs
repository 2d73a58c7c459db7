//! SQLite-backed storage using a single `storage_entries` table.
//!
//! # Invariants
//! - The table is created before the store is handed out.
//! - Databases stamped with a newer `user_version` are refused, never
//!   downgraded.

use super::{KeyValueStore, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Layout version stamped into `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_ENTRIES_SQL: &str = "CREATE TABLE IF NOT EXISTS storage_entries (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a database file, creating the entries table if needed.
    ///
    /// # Side effects
    /// - Emits `store_open` events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::open_with("file", || Connection::open(path))
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Self::open_with("memory", Connection::open_in_memory)
    }

    fn open_with(
        mode: &'static str,
        connect: impl FnOnce() -> rusqlite::Result<Connection>,
    ) -> StorageResult<Self> {
        let started_at = Instant::now();
        let opened = connect()
            .map_err(StorageError::from)
            .and_then(|conn| prepare_schema(&conn).map(|()| conn));

        match opened {
            Ok(conn) => {
                info!(
                    "event=store_open module=storage status=ok backend=sqlite mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=store_open module=storage status=error backend=sqlite mode={mode} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}

fn prepare_schema(conn: &Connection) -> StorageResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;

    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if found > SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchemaVersion {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    conn.execute_batch(CREATE_ENTRIES_SQL)?;
    if found < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    }
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO storage_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM storage_entries WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
