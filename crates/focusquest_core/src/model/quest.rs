//! Quest record model.
//!
//! # Responsibility
//! - Define the canonical quest record shared by the board, codec and UIs.
//! - Normalize user input (trimming, optional description) at creation.
//!
//! # Invariants
//! - `title` is trimmed and non-empty for quests built through `Quest::new`.
//! - `description` is `None` rather than an empty string.
//! - A freshly created quest is always in `QuestStatus::Backlog`.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const ID_SUFFIX_LEN: usize = 6;

/// Opaque quest identifier.
///
/// Generated ids combine creation time with a short random suffix. They are
/// compared for identity only and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestId(String);

impl QuestId {
    /// Wraps an existing identifier, e.g. one read back from storage.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generates `<unix-millis>-<random suffix>`.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis());
        let suffix = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(ID_SUFFIX_LEN)
            .collect::<String>();
        Self(format!("{millis}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for QuestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Board stage of a quest.
///
/// Serialized with the exact variant names; no other value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuestStatus {
    /// Captured but not started.
    Backlog,
    /// Work is in progress.
    Doing,
    /// Completed.
    Done,
}

impl QuestStatus {
    /// Board columns in display order.
    pub const ALL: [QuestStatus; 3] = [Self::Backlog, Self::Doing, Self::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }

    /// Parses the persisted form. Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Backlog" => Some(Self::Backlog),
            "Doing" => Some(Self::Doing),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl Display for QuestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input rejected while building a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for QuestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "quest title must not be empty"),
        }
    }
}

impl Error for QuestValidationError {}

/// A single quest on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: QuestStatus,
}

impl Quest {
    /// Creates a Backlog quest with a generated id from raw form input.
    ///
    /// # Errors
    /// - Returns `QuestValidationError::EmptyTitle` when `title` trims to empty.
    pub fn new(title: &str, description: Option<&str>) -> Result<Self, QuestValidationError> {
        Self::create_with_id(QuestId::generate(), title, description)
    }

    /// Same normalization as [`Quest::new`], with a caller-provided id.
    pub fn create_with_id(
        id: QuestId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Self, QuestValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(QuestValidationError::EmptyTitle);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            description: normalize_description(description),
            status: QuestStatus::Backlog,
        })
    }

    /// Builds a record verbatim. Used by hydration where fields were already
    /// checked by the codec.
    pub fn with_id(
        id: QuestId,
        title: impl Into<String>,
        description: Option<String>,
        status: QuestStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description,
            status,
        }
    }

    /// Returns a copy with only `status` replaced.
    pub fn with_status(&self, status: QuestStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
