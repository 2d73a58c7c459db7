//! Load/save lifecycle between the board and a key-value store.
//!
//! # Responsibility
//! - Hydrate the board once from `STORAGE_KEY`.
//! - Write the full quest list back after every board change.
//!
//! # Invariants
//! - State moves `Uninitialized -> Hydrating -> Ready` exactly once.
//! - `save` is suppressed until `Ready`.
//! - Neither `load` nor `save` returns an error or panics.

use crate::model::quest::Quest;
use crate::persistence::codec::{decode_quests, encode_quests, DecodeReport};
use crate::storage::KeyValueStore;
use log::{debug, error, info, warn};

/// Storage key holding the serialized quest array.
pub const STORAGE_KEY: &str = "focusquest-quests";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationState {
    Uninitialized,
    Hydrating,
    Ready,
}

/// Result of one `save` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Hydration has not finished; nothing was written.
    Suppressed,
    Written,
    /// Encode or write failed; the failure was logged.
    Failed,
}

/// What hydration found under `STORAGE_KEY`.
#[derive(Debug, PartialEq, Eq)]
enum StoredBoard {
    /// Key missing or holding an empty string.
    Absent,
    Unreadable(String),
    Malformed(String),
    NotAnArray,
    Decoded(DecodeReport),
}

impl StoredBoard {
    /// Logs the outcome and keeps only the usable quests.
    fn into_quests(self, backend: &str) -> Vec<Quest> {
        match self {
            Self::Absent => {
                info!("event=hydrate module=persistence status=ok backend={backend} source=empty");
                Vec::new()
            }
            Self::Unreadable(err) => {
                error!(
                    "event=hydrate module=persistence status=error backend={backend} error_code=storage_read_failed error={err}"
                );
                Vec::new()
            }
            Self::Malformed(err) => {
                error!(
                    "event=hydrate module=persistence status=error backend={backend} error_code=parse_failed error={err}"
                );
                Vec::new()
            }
            Self::NotAnArray => {
                warn!(
                    "event=hydrate module=persistence status=ignored backend={backend} reason=not_an_array"
                );
                Vec::new()
            }
            Self::Decoded(report) => {
                info!(
                    "event=hydrate module=persistence status=ok backend={backend} loaded={} dropped={}",
                    report.quests.len(),
                    report.dropped
                );
                report.quests
            }
        }
    }
}

pub struct PersistenceBridge<S: KeyValueStore> {
    storage: S,
    state: HydrationState,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: HydrationState::Uninitialized,
        }
    }

    pub fn state(&self) -> HydrationState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == HydrationState::Ready
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Reads the stored board.
    ///
    /// Returns `None` when hydration already ran; otherwise the well-formed
    /// stored quests (possibly empty). The bridge is `Ready` afterwards on
    /// every path.
    pub fn load(&mut self) -> Option<Vec<Quest>> {
        if self.state != HydrationState::Uninitialized {
            warn!("event=hydrate module=persistence status=skipped reason=already_hydrated");
            return None;
        }

        self.state = HydrationState::Hydrating;
        let quests = self.read_stored().into_quests(self.storage.backend_name());
        self.state = HydrationState::Ready;
        Some(quests)
    }

    fn read_stored(&self) -> StoredBoard {
        match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => match decode_quests(&raw) {
                Ok(report) if !report.was_array => StoredBoard::NotAnArray,
                Ok(report) => StoredBoard::Decoded(report),
                Err(err) => StoredBoard::Malformed(err.to_string()),
            },
            Ok(_) => StoredBoard::Absent,
            Err(err) => StoredBoard::Unreadable(err.to_string()),
        }
    }

    /// Writes `quests` to storage once hydration has completed.
    pub fn save(&mut self, quests: &[Quest]) -> SaveOutcome {
        if !self.is_ready() {
            debug!(
                "event=save module=persistence status=suppressed state={:?}",
                self.state
            );
            return SaveOutcome::Suppressed;
        }

        let backend = self.storage.backend_name();
        let payload = match encode_quests(quests) {
            Ok(payload) => payload,
            Err(err) => {
                error!(
                    "event=save module=persistence status=error backend={backend} error_code=encode_failed error={err}"
                );
                return SaveOutcome::Failed;
            }
        };

        match self.storage.set(STORAGE_KEY, &payload) {
            Ok(()) => {
                debug!(
                    "event=save module=persistence status=ok backend={backend} quests={} bytes={}",
                    quests.len(),
                    payload.len()
                );
                SaveOutcome::Written
            }
            Err(err) => {
                error!(
                    "event=save module=persistence status=error backend={backend} error_code=storage_write_failed error={err}"
                );
                SaveOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HydrationState, PersistenceBridge, SaveOutcome, StoredBoard, STORAGE_KEY};
    use crate::model::quest::{Quest, QuestId, QuestStatus};
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn save_before_load_is_suppressed() {
        let store = MemoryStore::new().with_entry(STORAGE_KEY, "[]");
        let mut bridge = PersistenceBridge::new(store);
        let quest = Quest::with_id(QuestId::new("1"), "t", None, QuestStatus::Backlog);

        assert_eq!(bridge.save(&[quest]), SaveOutcome::Suppressed);
        assert_eq!(bridge.state(), HydrationState::Uninitialized);
        assert_eq!(bridge.storage().get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn empty_stored_string_counts_as_absent() {
        let mut bridge = PersistenceBridge::new(MemoryStore::new().with_entry(STORAGE_KEY, ""));
        assert_eq!(bridge.read_stored(), StoredBoard::Absent);
        assert_eq!(bridge.load(), Some(Vec::new()));
        assert_eq!(bridge.state(), HydrationState::Ready);
    }

    #[test]
    fn garbage_is_reported_as_malformed() {
        let bridge = PersistenceBridge::new(MemoryStore::new().with_entry(STORAGE_KEY, "{oops"));
        assert!(matches!(bridge.read_stored(), StoredBoard::Malformed(_)));
    }

    #[test]
    fn load_runs_once() {
        let mut bridge = PersistenceBridge::new(MemoryStore::new());
        assert_eq!(bridge.load(), Some(Vec::new()));
        assert_eq!(bridge.state(), HydrationState::Ready);
        assert_eq!(bridge.load(), None);
    }
}
