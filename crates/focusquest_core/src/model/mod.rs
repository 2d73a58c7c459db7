//! Quest board domain model.
//!
//! # Responsibility
//! - Define the quest record and its three-stage lifecycle.
//! - Provide the pure board reducer and the derived views rendered by UIs.
//!
//! # Invariants
//! - Every quest on a board has a unique `QuestId`.
//! - Only `status` is ever mutated after a quest is created.
//! - New quests are prepended; nothing else reorders a board.

pub mod action;
pub mod board;
pub mod quest;
pub mod summary;
