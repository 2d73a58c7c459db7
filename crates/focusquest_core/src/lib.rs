//! Core domain logic for FocusQuest.
//! This crate owns the quest board invariants and their persistence.

pub mod logging;
pub mod model;
pub mod persistence;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::action::{available_actions, can_clear, QuestAction, CLEAR_CONFIRMATION_PROMPT};
pub use model::board::Board;
pub use model::quest::{Quest, QuestId, QuestStatus, QuestValidationError};
pub use model::summary::BoardSummary;
pub use persistence::bridge::{HydrationState, PersistenceBridge, SaveOutcome, STORAGE_KEY};
pub use persistence::codec::{decode_quests, encode_quests, DecodeReport};
pub use service::quest_service::QuestBoardService;
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, SqliteStore, StorageError, StorageResult,
    SCHEMA_VERSION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
