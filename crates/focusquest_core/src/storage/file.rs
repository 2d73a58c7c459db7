//! File-backed storage: one file per key inside a directory.
//!
//! # Invariants
//! - Writes go through a temporary file and rename, so readers never see a
//!   partially written value.
//! - Keys are restricted to `[A-Za-z0-9._-]` and cannot escape the directory.

use super::{KeyValueStore, StorageError, StorageResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension(TEMP_EXTENSION);

        if let Err(source) = write_fully(&tmp, value.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Io { path: tmp, source });
        }

        fs::rename(&tmp, &path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StorageError::Io { path, source }
        })
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

fn write_fully(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_key, FileStore};
    use crate::storage::KeyValueStore;

    #[test]
    fn key_validation_blocks_path_escapes() {
        assert!(validate_key("focusquest-quests").is_ok());
        assert!(validate_key("../etc").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        let key = "focusquest-quests";

        // A directory squatting on the final path makes the rename fail
        // after the temp file has been written.
        std::fs::create_dir(store.path_for(key).unwrap()).unwrap();
        std::fs::write(dir.path().join("focusquest-quests.json").join("x"), "x").unwrap();

        assert!(store.set(key, "[]").is_err());
        assert!(!dir.path().join("focusquest-quests.json.tmp").exists());
    }
}
