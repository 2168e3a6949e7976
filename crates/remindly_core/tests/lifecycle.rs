use remindly_core::db::open_db_in_memory;
use remindly_core::{
    Category, InMemoryScheduler, KeyValueStore, LifecycleError, PermissionStatus, Reminder,
    ReminderDraft, ReminderService, ReminderStore, ReminderValidationError, Repeat,
    SqliteKeyValueStore, Trigger, REMINDERS_KEY,
};
use rusqlite::Connection;
use std::collections::HashSet;
use uuid::Uuid;

// 2024-01-01T09:00:00Z, a Monday.
const MONDAY_9AM_MS: i64 = 1_704_099_600_000;

#[test]
fn create_assigns_unique_ids_and_prepends() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, _scheduler) = service_over(&conn);

    let first = service.create(&draft("feed the cat")).unwrap();
    let second = service.create(&draft("water plants")).unwrap();

    let ids: HashSet<_> = service.reminders().iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(first.id, second.id);

    // Newest first.
    assert_eq!(service.reminders()[0].id, second.id);
    assert_eq!(service.reminders()[1].id, first.id);
}

#[test]
fn create_with_empty_title_fails_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    for title in ["", "   "] {
        let err = service.create(&draft(title)).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::Validation(ReminderValidationError::EmptyTitle)
        ));
    }

    assert!(service.reminders().is_empty());
    assert!(scheduler.scheduled().is_empty());
    // Nothing was persisted either.
    let kv = SqliteKeyValueStore::new(&conn);
    assert_eq!(kv.get(REMINDERS_KEY).unwrap(), None);
}

#[test]
fn buy_milk_scenario_schedules_one_shot_notification() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    let reminder = service
        .create(&ReminderDraft {
            title: "Buy milk".to_string(),
            category: Category::Personal,
            repeat: Repeat::None,
            occurs_at: MONDAY_9AM_MS,
        })
        .unwrap();

    assert_eq!(service.reminders().len(), 1);
    assert_eq!(service.reminders()[0].title, "Buy milk");

    let scheduled = scheduler.scheduled();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(
        scheduled[0].trigger,
        Trigger::At {
            epoch_ms: MONDAY_9AM_MS
        }
    );
    assert_eq!(scheduled[0].content.title, "Buy milk");
    assert_eq!(scheduled[0].content.body, "Personal reminder");
    assert_eq!(reminder.schedule_handle.as_deref(), Some(scheduled[0].handle.as_str()));
}

#[test]
fn repeating_reminders_get_repeating_triggers() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    service
        .create(&ReminderDraft {
            title: "standup".to_string(),
            category: Category::Work,
            repeat: Repeat::Daily,
            occurs_at: MONDAY_9AM_MS,
        })
        .unwrap();
    service
        .create(&ReminderDraft {
            title: "weekly review".to_string(),
            category: Category::Work,
            repeat: Repeat::Weekly,
            occurs_at: MONDAY_9AM_MS,
        })
        .unwrap();

    let triggers: Vec<_> = scheduler
        .scheduled()
        .into_iter()
        .map(|notification| notification.trigger)
        .collect();
    assert!(triggers.contains(&Trigger::Daily { hour: 9, minute: 0 }));
    assert!(triggers.contains(&Trigger::Weekly {
        weekday: 2,
        hour: 9,
        minute: 0
    }));
}

#[test]
fn edit_updates_fields_in_place_and_keeps_the_schedule() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    let anchor = service.create(&draft("anchor")).unwrap();
    let created = service.create(&draft("Buy milk")).unwrap();
    let original_handle = created.schedule_handle.clone();

    let updated = service
        .edit(
            created.id,
            &ReminderDraft {
                title: "Buy milk and eggs".to_string(),
                category: Category::Personal,
                repeat: Repeat::Daily,
                occurs_at: MONDAY_9AM_MS,
            },
        )
        .unwrap();

    assert_eq!(service.reminders().len(), 2);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Buy milk and eggs");
    assert_eq!(updated.repeat, Repeat::Daily);

    // Position in the sequence is unchanged.
    assert_eq!(service.reminders()[0].id, created.id);
    assert_eq!(service.reminders()[1].id, anchor.id);

    // Shipped behavior: edit never touches the platform schedule, even
    // when repeat or occurs_at change. The old trigger stays live.
    assert_eq!(updated.schedule_handle, original_handle);
    assert_eq!(scheduler.scheduled().len(), 2);
    assert!(scheduler.cancelled().is_empty());
}

#[test]
fn edit_with_empty_title_leaves_the_record_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, _scheduler) = service_over(&conn);

    let created = service.create(&draft("keep me")).unwrap();

    let err = service.edit(created.id, &draft("   ")).unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::Validation(ReminderValidationError::EmptyTitle)
    ));
    assert_eq!(service.reminders()[0].title, "keep me");
}

#[test]
fn edit_unknown_id_fails_with_not_found_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, _scheduler) = service_over(&conn);

    service.create(&draft("only one")).unwrap();
    let before: Vec<Reminder> = service.reminders().to_vec();

    let missing = Uuid::new_v4();
    let err = service.edit(missing, &draft("does not matter")).unwrap_err();
    assert!(matches!(err, LifecycleError::NotFound(id) if id == missing));
    assert_eq!(service.reminders(), before.as_slice());
}

#[test]
fn delete_cancels_the_schedule_and_removes_the_record() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    let created = service.create(&draft("short lived")).unwrap();
    let handle = created.schedule_handle.clone().unwrap();

    service.delete(created.id).unwrap();

    assert!(service.reminders().iter().all(|r| r.id != created.id));
    assert_eq!(scheduler.cancelled(), vec![handle]);

    // Removal is persisted.
    let reloaded = ReminderStore::load(SqliteKeyValueStore::new(&conn));
    assert!(reloaded.reminders().is_empty());
}

#[test]
fn delete_unknown_id_fails_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    let missing = Uuid::new_v4();
    let err = service.delete(missing).unwrap_err();

    assert!(matches!(err, LifecycleError::NotFound(id) if id == missing));
    assert!(scheduler.cancelled().is_empty());
}

#[test]
fn scheduler_failure_is_non_fatal_to_create() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    scheduler.fail_next_schedule();
    let created = service.create(&draft("degraded")).unwrap();

    assert_eq!(created.schedule_handle, None);
    assert_eq!(service.reminders().len(), 1);
    assert!(scheduler.scheduled().is_empty());
}

#[test]
fn delete_swallows_cancel_failures() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    let created = service.create(&draft("already fired")).unwrap();

    scheduler.fail_next_cancel();
    service.delete(created.id).unwrap();

    assert!(service.reminders().is_empty());
}

#[test]
fn deleting_an_unscheduled_reminder_skips_cancel() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    scheduler.fail_next_schedule();
    let created = service.create(&draft("no handle")).unwrap();

    service.delete(created.id).unwrap();
    assert!(scheduler.cancelled().is_empty());
}

#[test]
fn permission_denial_is_reported_but_not_fatal() {
    let conn = open_db_in_memory().unwrap();
    let (mut service, scheduler) = service_over(&conn);

    scheduler.set_permission(PermissionStatus::Denied);
    assert_eq!(service.request_permission(), PermissionStatus::Denied);

    // Reminders can still be created after a denial.
    service.create(&draft("still works")).unwrap();
    assert_eq!(service.reminders().len(), 1);
}

#[test]
fn created_reminders_survive_a_service_restart() {
    let conn = open_db_in_memory().unwrap();
    let created = {
        let (mut service, _scheduler) = service_over(&conn);
        service.create(&draft("durable")).unwrap()
    };

    let (service, _scheduler) = service_over(&conn);
    assert_eq!(service.reminders().len(), 1);
    assert_eq!(service.reminders()[0], created);
}

fn draft(title: &str) -> ReminderDraft {
    ReminderDraft {
        title: title.to_string(),
        category: Category::Personal,
        repeat: Repeat::None,
        occurs_at: MONDAY_9AM_MS,
    }
}

fn service_over(
    conn: &Connection,
) -> (
    ReminderService<SqliteKeyValueStore<'_>, InMemoryScheduler>,
    InMemoryScheduler,
) {
    let scheduler = InMemoryScheduler::new();
    let store = ReminderStore::load(SqliteKeyValueStore::new(conn));
    (ReminderService::new(store, scheduler.clone()), scheduler)
}
