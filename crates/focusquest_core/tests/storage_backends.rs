use focusquest_core::{
    FileStore, KeyValueStore, SqliteStore, StorageError, SCHEMA_VERSION, STORAGE_KEY,
};
use rusqlite::Connection;

#[test]
fn file_store_round_trips_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = FileStore::open(dir.path().join("data")).unwrap();
    assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    store.set(STORAGE_KEY, "[1,2,3]").unwrap();

    let reopened = FileStore::open(dir.path().join("data")).unwrap();
    assert_eq!(reopened.get(STORAGE_KEY).unwrap().as_deref(), Some("[1,2,3]"));
    assert!(reopened.path_for(STORAGE_KEY).unwrap().exists());
}

#[test]
fn file_store_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    store.set(STORAGE_KEY, "[]").unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![format!("{STORAGE_KEY}.json")]);
}

#[test]
fn file_store_remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    store.set("k", "v").unwrap();

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn file_store_rejects_escaping_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    let err = store.set("../outside", "x").unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(key) if key == "../outside"));
}

#[test]
fn sqlite_store_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focusquest.sqlite3");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set(STORAGE_KEY, "[]").unwrap();
        store.set(STORAGE_KEY, "[{}]").unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("[{}]"));
}

#[test]
fn open_stamps_schema_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.sqlite3");
    SqliteStore::open(&path).unwrap();

    let conn = Connection::open(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION + 1))
            .unwrap();
    }

    let err = SqliteStore::open(&path).err().unwrap();
    assert!(matches!(
        err,
        StorageError::UnsupportedSchemaVersion { found, supported }
            if found == SCHEMA_VERSION + 1 && supported == SCHEMA_VERSION
    ));
}
