//! Task domain model.
//!
//! # Responsibility
//! - Define the task record tracked by each board quadrant.
//! - Define the four-quadrant priority tagging scheme.
//!
//! # Invariants
//! - `Task::id` is unique within its owning quadrant at any instant.
//! - Every task in a quadrant carries that quadrant's `Priority` tag.
//! - `schedule` is the empty string whenever `is_schedule` is false.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifier for a task, unique within one quadrant.
///
/// Ids are derived from list length at creation time (`len + 1`), so a
/// deleted-then-added sequence can reuse an id. That behavior is kept for
/// compatibility with the recorded event stream; see DESIGN.md before
/// changing it.
pub type TaskId = String;

/// Identity of the board owner, attached to every persistence event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Eisenhower-matrix quadrant a task belongs to.
///
/// Numeric codes 1..=4 match the board's top-left to bottom-right reading
/// order and are the stable form used in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// High importance, urgent (code 1).
    UrgentImportant,
    /// High importance, not urgent (code 2).
    ImportantNotUrgent,
    /// Low importance, urgent (code 3).
    UrgentNotImportant,
    /// Low importance, not urgent (code 4).
    NeitherUrgentNorImportant,
}

impl Priority {
    /// All quadrants in board reading order.
    pub const ALL: [Priority; 4] = [
        Priority::UrgentImportant,
        Priority::ImportantNotUrgent,
        Priority::UrgentNotImportant,
        Priority::NeitherUrgentNorImportant,
    ];

    /// Stable numeric code used in storage and event rows.
    pub fn code(self) -> u8 {
        match self {
            Self::UrgentImportant => 1,
            Self::ImportantNotUrgent => 2,
            Self::UrgentNotImportant => 3,
            Self::NeitherUrgentNorImportant => 4,
        }
    }

    /// Parses a stable numeric code back into a quadrant tag.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::UrgentImportant),
            2 => Some(Self::ImportantNotUrgent),
            3 => Some(Self::UrgentNotImportant),
            4 => Some(Self::NeitherUrgentNorImportant),
            _ => None,
        }
    }

    /// Human-readable quadrant heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::UrgentImportant => "High Importance + Urgent",
            Self::ImportantNotUrgent => "High Importance + Not Urgent",
            Self::UrgentNotImportant => "Low Importance + Urgent",
            Self::NeitherUrgentNorImportant => "Low Importance + Not Urgent",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::UrgentImportant => "urgent_important",
            Self::ImportantNotUrgent => "important_not_urgent",
            Self::UrgentNotImportant => "urgent_not_important",
            Self::NeitherUrgentNorImportant => "neither_urgent_nor_important",
        };
        write!(f, "{text}")
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "urgent_important" => Ok(Self::UrgentImportant),
            "important_not_urgent" => Ok(Self::ImportantNotUrgent),
            "urgent_not_important" => Ok(Self::UrgentNotImportant),
            "neither_urgent_nor_important" => Ok(Self::NeitherUrgentNorImportant),
            other => Err(format!("unknown priority tag `{other}`")),
        }
    }
}

/// One unit of work on the board.
///
/// A task never changes after creation except for list position; complete
/// and delete remove the whole record rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the owning quadrant; see [`TaskId`] for reuse caveats.
    pub id: TaskId,
    /// Free-form task text. Non-empty by convention, not enforced here.
    pub content: String,
    /// Fixed quadrant tag stamped by the owning store.
    pub priority: Priority,
    /// Estimated effort. Opaque to the board; the calendar link renders it.
    pub duration_minutes: u32,
    /// Timestamp or descriptor text; empty whenever `is_schedule` is false.
    pub schedule: String,
    /// Gates whether `schedule` is meaningful.
    pub is_schedule: bool,
}
