//! Key-value storage contracts and backends.
//!
//! # Responsibility
//! - Define the narrow `get`/`set` interface the persistence bridge needs.
//! - Provide in-memory, file and SQLite implementations.
//! - Carry backend failures (io, sqlite, quota) in one error type.
//!
//! # Invariants
//! - Backends store values verbatim; they never parse quest data.
//! - A failed `set` leaves the previously stored value readable.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;
mod memory;
mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, SCHEMA_VERSION};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Sqlite(rusqlite::Error),
    /// SQLite file was written by a newer layout than this build knows.
    UnsupportedSchemaVersion {
        found: u32,
        supported: u32,
    },
    /// Write would exceed the backend's capacity.
    QuotaExceeded {
        key: String,
        requested: usize,
        quota: usize,
    },
    /// Key cannot be mapped onto the backend's namespace.
    InvalidKey(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "storage io error at `{}`: {source}", path.display()),
            Self::Sqlite(err) => write!(f, "sqlite storage error: {err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "storage schema version {found} is newer than supported {supported}"
            ),
            Self::QuotaExceeded {
                key,
                requested,
                quota,
            } => write!(
                f,
                "storage quota exceeded for `{key}`: {requested} bytes requested, quota {quota}"
            ),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. }
            | Self::QuotaExceeded { .. }
            | Self::InvalidKey(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Durable string store keyed by name.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing was ever stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
    /// Short name used in log events.
    fn backend_name(&self) -> &'static str;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}
