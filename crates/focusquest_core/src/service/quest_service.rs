//! Quest board use-case service.
//!
//! # Responsibility
//! - Own the authoritative `Board` for a session.
//! - Apply board operations and mirror every change through the bridge.
//!
//! # Invariants
//! - The board is replaced wholesale only by `hydrate`.
//! - A failed save never rolls back the in-memory board.
//! - Rejected input (blank title, declined clear) neither changes the board
//!   nor triggers a save.

use crate::model::board::Board;
use crate::model::quest::{QuestId, QuestStatus};
use crate::model::summary::BoardSummary;
use crate::persistence::bridge::{HydrationState, PersistenceBridge, SaveOutcome};
use crate::storage::KeyValueStore;
use log::{debug, info};

pub struct QuestBoardService<S: KeyValueStore> {
    board: Board,
    bridge: PersistenceBridge<S>,
    last_save: Option<SaveOutcome>,
}

impl<S: KeyValueStore> QuestBoardService<S> {
    /// Creates a service with an empty, not yet hydrated board.
    pub fn new(storage: S) -> Self {
        Self {
            board: Board::new(),
            bridge: PersistenceBridge::new(storage),
            last_save: None,
        }
    }

    /// Loads the stored board once.
    ///
    /// Returns the number of quests loaded. Later calls return `0` and leave
    /// the board untouched.
    pub fn hydrate(&mut self) -> usize {
        let Some(quests) = self.bridge.load() else {
            return 0;
        };

        let loaded = quests.len();
        if loaded > 0 {
            self.board = Board::from_quests(quests);
        }
        loaded
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn summary(&self) -> BoardSummary {
        self.board.summary()
    }

    pub fn hydration_state(&self) -> HydrationState {
        self.bridge.state()
    }

    /// Outcome of the most recent save attempt, if any.
    pub fn last_save(&self) -> Option<SaveOutcome> {
        self.last_save
    }

    pub fn storage(&self) -> &S {
        self.bridge.storage()
    }

    pub fn into_storage(self) -> S {
        self.bridge.into_storage()
    }

    /// Adds a Backlog quest and returns its id.
    ///
    /// Returns `None` without saving when `title` trims to empty.
    pub fn add_quest(&mut self, title: &str, description: Option<&str>) -> Option<QuestId> {
        let next = self.board.add(title, description);
        if next.len() == self.board.len() {
            debug!("event=quest_add module=service status=rejected reason=empty_title");
            return None;
        }

        let id = next.quests().first().map(|quest| quest.id.clone());
        self.commit(next);
        if let Some(id) = &id {
            info!("event=quest_add module=service status=ok quest_id={id}");
        }
        id
    }

    /// Sets the status of `id`; unknown ids leave the board unchanged.
    pub fn set_status(&mut self, id: &QuestId, status: QuestStatus) {
        let found = self.board.contains(id);
        self.commit(self.board.transition(id, status));
        info!(
            "event=quest_transition module=service status=ok quest_id={id} target={status} found={found}"
        );
    }

    pub fn start_quest(&mut self, id: &QuestId) {
        self.set_status(id, QuestStatus::Doing);
    }

    pub fn complete_quest(&mut self, id: &QuestId) {
        self.set_status(id, QuestStatus::Done);
    }

    pub fn delete_quest(&mut self, id: &QuestId) {
        let found = self.board.contains(id);
        self.commit(self.board.delete(id));
        info!("event=quest_delete module=service status=ok quest_id={id} found={found}");
    }

    /// Empties the board after `confirm` approves.
    ///
    /// Returns whether the board was cleared.
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            debug!("event=board_clear module=service status=declined");
            return false;
        }

        let removed = self.board.len();
        self.commit(self.board.clear_all());
        info!("event=board_clear module=service status=ok removed={removed}");
        true
    }

    fn commit(&mut self, next: Board) {
        self.board = next;
        self.last_save = Some(self.bridge.save(self.board.quests()));
    }
}

#[cfg(test)]
mod tests {
    use super::QuestBoardService;
    use crate::persistence::bridge::{HydrationState, SaveOutcome};
    use crate::storage::MemoryStore;

    #[test]
    fn mutations_before_hydrate_are_not_saved() {
        let mut service = QuestBoardService::new(MemoryStore::new());
        assert_eq!(service.hydration_state(), HydrationState::Uninitialized);

        service.add_quest("early", None).unwrap();
        assert_eq!(service.last_save(), Some(SaveOutcome::Suppressed));
    }

    #[test]
    fn blank_title_skips_save() {
        let mut service = QuestBoardService::new(MemoryStore::new());
        service.hydrate();
        assert_eq!(service.add_quest("  ", Some("desc")), None);
        assert_eq!(service.last_save(), None);
    }

    #[test]
    fn declined_clear_keeps_board() {
        let mut service = QuestBoardService::new(MemoryStore::new());
        service.hydrate();
        service.add_quest("keep me", None);

        assert!(!service.clear_all(|| false));
        assert_eq!(service.board().len(), 1);
        assert!(service.clear_all(|| true));
        assert!(service.board().is_empty());
    }
}
