//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the full reminder lifecycle against an in-memory database
//!   to verify `remindly_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use remindly_core::db::open_db_in_memory;
use remindly_core::{
    Category, InMemoryScheduler, ReminderDraft, ReminderService, ReminderStore, Repeat,
    SqliteKeyValueStore,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("remindly_core version={}", remindly_core::core_version());

    let conn = open_db_in_memory()?;
    let scheduler = InMemoryScheduler::new();
    let store = ReminderStore::load(SqliteKeyValueStore::new(&conn));
    let mut service = ReminderService::new(store, scheduler.clone());

    println!("permission={:?}", service.request_permission());

    let reminder = service.create(&ReminderDraft {
        title: "Morning check-in".to_string(),
        category: Category::Work,
        repeat: Repeat::Daily,
        occurs_at: 1_704_099_600_000,
    })?;
    println!(
        "created reminders={} scheduled={}",
        service.reminders().len(),
        reminder.schedule_handle.is_some()
    );

    service.delete(reminder.id)?;
    println!(
        "deleted reminders={} cancelled={}",
        service.reminders().len(),
        scheduler.cancelled().len()
    );

    Ok(())
}
