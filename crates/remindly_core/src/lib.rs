//! Core domain logic for Remindly.
//! This crate is the single source of truth for reminder lifecycle invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{Category, Reminder, ReminderId, ReminderValidationError, Repeat};
pub use schedule::scheduler::{
    InMemoryScheduler, NotificationContent, NotificationScheduler, PermissionStatus,
    ScheduleHandle, SchedulerError,
};
pub use schedule::trigger::{compute_trigger, Trigger};
pub use service::reminder_service::{LifecycleError, ReminderDraft, ReminderService};
pub use store::kv::{KeyValueStore, SqliteKeyValueStore, StoreError};
pub use store::reminder_store::{ReminderStore, REMINDERS_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
