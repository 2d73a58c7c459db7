//! Per-quest actions offered to the user.
//!
//! Only forward moves are exposed: Backlog can be started, Doing can be
//! completed, and nothing leaves Done. Delete is always available.

use crate::model::board::Board;
use crate::model::quest::QuestStatus;

/// Prompt shown before the board is cleared.
pub const CLEAR_CONFIRMATION_PROMPT: &str =
    "Clear all quests? This will remove every quest from the board.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestAction {
    Start,
    Complete,
    Delete,
}

impl QuestAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Complete => "Complete",
            Self::Delete => "Delete",
        }
    }

    /// Status a quest moves to, or `None` for removal.
    pub fn target_status(self) -> Option<QuestStatus> {
        match self {
            Self::Start => Some(QuestStatus::Doing),
            Self::Complete => Some(QuestStatus::Done),
            Self::Delete => None,
        }
    }
}

pub fn available_actions(status: QuestStatus) -> &'static [QuestAction] {
    match status {
        QuestStatus::Backlog => &[QuestAction::Start, QuestAction::Delete],
        QuestStatus::Doing => &[QuestAction::Complete, QuestAction::Delete],
        QuestStatus::Done => &[QuestAction::Delete],
    }
}

/// Clear-all is only offered when there is something to clear.
pub fn can_clear(board: &Board) -> bool {
    !board.is_empty()
}
