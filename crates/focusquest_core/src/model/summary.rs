//! Derived board statistics.

use crate::model::quest::{Quest, QuestStatus};
use std::fmt::Write;

const EMPTY_BOARD_LINE: &str = "No quests yet. Create your first quest to get rolling.";
const ALL_COMPLETE_SUFFIX: &str = " · All quests complete! 🎉";

/// Per-stage counts for a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardSummary {
    pub backlog: usize,
    pub doing: usize,
    pub done: usize,
    pub total: usize,
    /// `true` only when the board is non-empty and every quest is `Done`.
    pub all_complete: bool,
}

impl BoardSummary {
    pub fn derive(quests: &[Quest]) -> Self {
        let mut summary = quests.iter().fold(Self::default(), |mut acc, quest| {
            match quest.status {
                QuestStatus::Backlog => acc.backlog += 1,
                QuestStatus::Doing => acc.doing += 1,
                QuestStatus::Done => acc.done += 1,
            }
            acc
        });
        summary.total = quests.len();
        summary.all_complete = summary.total > 0 && summary.done == summary.total;
        summary
    }

    pub fn count(&self, status: QuestStatus) -> usize {
        match status {
            QuestStatus::Backlog => self.backlog,
            QuestStatus::Doing => self.doing,
            QuestStatus::Done => self.done,
        }
    }

    /// One-line status text shown above the board.
    pub fn summary_line(&self) -> String {
        if self.total == 0 {
            return EMPTY_BOARD_LINE.to_string();
        }

        let mut line = format!("{} quests total", self.total);
        for status in QuestStatus::ALL {
            let _ = write!(line, " · {} {}", self.count(status), status);
        }
        if self.all_complete {
            line.push_str(ALL_COMPLETE_SUFFIX);
        }
        line
    }
}
