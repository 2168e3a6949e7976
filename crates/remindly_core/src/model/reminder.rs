//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the store and projected by
//!   the list UI.
//! - Provide title validation shared by every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - `title` must be non-empty after trimming on every accepted write.
//! - `schedule_handle` is `None` exactly when no platform notification is
//!   known to be live for this record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a reminder record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = Uuid;

/// Fixed grouping set offered by the form UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Study,
    Personal,
    Custom,
}

impl Default for Category {
    fn default() -> Self {
        Category::Personal
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Work => "Work",
            Category::Study => "Study",
            Category::Personal => "Personal",
            Category::Custom => "Custom",
        };
        write!(f, "{label}")
    }
}

/// Repeat cadence for the scheduled notification.
///
/// Serialized lowercase to match the wire values the list view was built
/// around (`none` / `daily` / `weekly`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    None,
    Daily,
    Weekly,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::None
    }
}

/// Validation failures for reminder field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "reminder title must not be empty"),
        }
    }
}

impl Error for ReminderValidationError {}

/// Canonical record describing one scheduled alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable global ID, also the correlation key to the scheduled
    /// notification.
    pub id: ReminderId,
    /// User-facing title; non-empty after trimming.
    pub title: String,
    pub category: Category,
    pub repeat: Repeat,
    /// Anchor instant for the first/only occurrence, unix epoch
    /// milliseconds.
    pub occurs_at: i64,
    /// Opaque handle from the notification scheduler; `None` when
    /// scheduling failed or was never attempted.
    pub schedule_handle: Option<String>,
}

impl Reminder {
    /// Creates a new reminder with a generated stable ID and no schedule
    /// handle attached yet.
    pub fn new(
        title: impl Into<String>,
        category: Category,
        repeat: Repeat,
        occurs_at: i64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, category, repeat, occurs_at)
    }

    /// Creates a reminder with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    /// Does not validate field content; write paths call [`Self::validate`].
    pub fn with_id(
        id: ReminderId,
        title: impl Into<String>,
        category: Category,
        repeat: Repeat,
        occurs_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            repeat,
            occurs_at,
            schedule_handle: None,
        }
    }

    /// Checks field content ahead of any mutation or persistence.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.title.trim().is_empty() {
            return Err(ReminderValidationError::EmptyTitle);
        }
        Ok(())
    }
}
