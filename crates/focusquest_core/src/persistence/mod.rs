//! Mirrors the quest board into durable key-value storage.
//!
//! # Responsibility
//! - Encode/decode the persisted quest array and filter malformed records.
//! - Gate saves behind a one-shot hydration pass.
//!
//! # Invariants
//! - No save reaches storage before hydration has completed.
//! - Hydration completes on every path, including read and parse failures.
//! - Storage failures are logged and never propagated to the board.

pub mod bridge;
pub mod codec;
