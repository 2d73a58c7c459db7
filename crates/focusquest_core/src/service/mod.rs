//! Core use-case services.
//!
//! # Responsibility
//! - Pair the in-memory board with its persistence bridge.
//! - Keep presentation layers decoupled from storage details.

pub mod quest_service;
