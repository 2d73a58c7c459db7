//! Quest board reducer.
//!
//! # Responsibility
//! - Hold the ordered quest collection (most recent first).
//! - Derive a new board for every add/transition/delete/clear operation.
//!
//! # Invariants
//! - Operations never fail; an unknown id or an empty title is a no-op.
//! - `transition` changes only the `status` of the targeted quest.
//! - Quest ids on a board are unique; `add` regenerates colliding ids.

use crate::model::quest::{Quest, QuestId, QuestStatus};
use crate::model::summary::BoardSummary;

/// Ordered quest collection. Index 0 is the most recently added quest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    quests: Vec<Quest>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already ordered list, e.g. the result of hydration.
    pub fn from_quests(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn into_quests(self) -> Vec<Quest> {
        self.quests
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn get(&self, id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|quest| &quest.id == id)
    }

    pub fn contains(&self, id: &QuestId) -> bool {
        self.get(id).is_some()
    }

    /// Quests in one column, keeping board order.
    pub fn in_status(&self, status: QuestStatus) -> impl Iterator<Item = &Quest> + '_ {
        self.quests.iter().filter(move |quest| quest.status == status)
    }

    /// Prepends a new Backlog quest.
    ///
    /// Returns an equal board when `title` trims to empty.
    pub fn add(&self, title: &str, description: Option<&str>) -> Self {
        let mut id = QuestId::generate();
        while self.contains(&id) {
            id = QuestId::generate();
        }

        let Ok(quest) = Quest::create_with_id(id, title, description) else {
            return self.clone();
        };

        let mut quests = Vec::with_capacity(self.quests.len() + 1);
        quests.push(quest);
        quests.extend(self.quests.iter().cloned());
        Self { quests }
    }

    /// Replaces the status of the quest matching `id`.
    ///
    /// Ordering between stages is not enforced here; the action rules in
    /// `model::action` decide which moves a UI offers.
    pub fn transition(&self, id: &QuestId, status: QuestStatus) -> Self {
        let quests = self
            .quests
            .iter()
            .map(|quest| {
                if &quest.id == id {
                    quest.with_status(status)
                } else {
                    quest.clone()
                }
            })
            .collect();
        Self { quests }
    }

    pub fn delete(&self, id: &QuestId) -> Self {
        let quests = self
            .quests
            .iter()
            .filter(|quest| &quest.id != id)
            .cloned()
            .collect();
        Self { quests }
    }

    /// Empties the board. Confirmation is the caller's responsibility.
    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    pub fn summary(&self) -> BoardSummary {
        BoardSummary::derive(&self.quests)
    }
}
