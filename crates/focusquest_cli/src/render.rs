//! Plain-text rendering of the board.

use focusquest_core::{available_actions, Board, Quest, QuestStatus};
use std::fmt::Write;

const EMPTY_COLUMN_TEXT: &str = "No quests here yet. Add one above to get started!";

/// Summary line followed by the three columns.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "FocusQuest");
    let _ = writeln!(out, "{}", board.summary().summary_line());

    for status in QuestStatus::ALL {
        let _ = writeln!(out);
        render_column(&mut out, board, status);
    }
    out
}

fn render_column(out: &mut String, board: &Board, status: QuestStatus) {
    let _ = writeln!(out, "== {} ==", status.as_str().to_uppercase());

    let mut quests = board.in_status(status).peekable();
    if quests.peek().is_none() {
        let _ = writeln!(out, "  {EMPTY_COLUMN_TEXT}");
        return;
    }
    for quest in quests {
        render_card(out, quest);
    }
}

fn render_card(out: &mut String, quest: &Quest) {
    let _ = writeln!(out, "  - {} [{}]", quest.title, quest.id);
    if let Some(description) = &quest.description {
        let _ = writeln!(out, "      {description}");
    }
    let labels: Vec<&str> = available_actions(quest.status)
        .iter()
        .map(|action| action.label())
        .collect();
    let _ = writeln!(out, "      actions: {}", labels.join(" | "));
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use focusquest_core::{Board, QuestStatus};

    #[test]
    fn empty_board_shows_placeholder_in_every_column() {
        let rendered = render_board(&Board::new());
        assert!(rendered.contains("No quests yet. Create your first quest to get rolling."));
        assert_eq!(rendered.matches("No quests here yet.").count(), 3);
    }

    #[test]
    fn cards_list_only_offered_actions() {
        let board = Board::new().add("Review notes", Some("chapter 2"));
        let id = board.quests()[0].id.clone();
        let board = board.transition(&id, QuestStatus::Doing);

        let rendered = render_board(&board);
        assert!(rendered.contains("== DOING ==\n  - Review notes"));
        assert!(rendered.contains("      chapter 2\n      actions: Complete | Delete"));
        assert!(!rendered.contains("Start"));
    }

    #[test]
    fn summary_line_comes_before_columns() {
        let board = Board::new().add("Review notes", None);
        let rendered = render_board(&board);

        let summary = rendered.find("1 quests total").unwrap();
        let backlog = rendered.find("== BACKLOG ==").unwrap();
        assert!(summary < backlog);
    }
}
