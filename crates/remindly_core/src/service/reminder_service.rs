//! Reminder lifecycle service.
//!
//! # Responsibility
//! - Provide the create/edit/delete/list entry points the UI calls.
//! - Keep stored reminders and their platform notifications consistent;
//!   this is the only component that talks to the scheduler.
//!
//! # Invariants
//! - Validation failures abort before any mutation or persistence.
//! - Scheduler failures never fail an operation; they degrade to a
//!   missing handle and a warn log.
//! - The sequence is ordered newest first; create prepends, edit keeps
//!   position.

use crate::model::reminder::{Category, Reminder, ReminderId, ReminderValidationError, Repeat};
use crate::schedule::scheduler::{
    NotificationContent, NotificationScheduler, PermissionStatus, SchedulerError,
};
use crate::schedule::trigger::compute_trigger;
use crate::store::kv::{KeyValueStore, StoreError};
use crate::store::reminder_store::ReminderStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle operation failure.
#[derive(Debug)]
pub enum LifecycleError {
    Validation(ReminderValidationError),
    NotFound(ReminderId),
    Persistence(StoreError),
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "reminder not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LifecycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<ReminderValidationError> for LifecycleError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for LifecycleError {
    fn from(value: StoreError) -> Self {
        Self::Persistence(value)
    }
}

/// User-supplied fields for a create or edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub title: String,
    pub category: Category,
    pub repeat: Repeat,
    /// Anchor instant, unix epoch milliseconds.
    pub occurs_at: i64,
}

/// Use-case service for the reminder lifecycle.
pub struct ReminderService<K: KeyValueStore, S: NotificationScheduler> {
    store: ReminderStore<K>,
    scheduler: S,
}

impl<K: KeyValueStore, S: NotificationScheduler> ReminderService<K, S> {
    pub fn new(store: ReminderStore<K>, scheduler: S) -> Self {
        Self { store, scheduler }
    }

    /// Startup permission query; denial only logs, reminders can still
    /// be created without it.
    pub fn request_permission(&self) -> PermissionStatus {
        let status = self.scheduler.request_permission();
        if status == PermissionStatus::Denied {
            warn!("event=notif_permission module=service status=denied");
        }
        status
    }

    /// Canonical ordered sequence for the list view, newest first.
    pub fn reminders(&self) -> &[Reminder] {
        self.store.reminders()
    }

    /// Creates a reminder: validates, schedules its notification and
    /// prepends it to the stored sequence.
    ///
    /// A scheduler failure leaves `schedule_handle` empty and is not
    /// retried; the reminder is created regardless.
    pub fn create(&mut self, draft: &ReminderDraft) -> Result<Reminder, LifecycleError> {
        let mut reminder = Reminder::new(
            draft.title.clone(),
            draft.category,
            draft.repeat,
            draft.occurs_at,
        );
        reminder.validate()?;

        let trigger = compute_trigger(reminder.repeat, reminder.occurs_at);
        let content = NotificationContent::for_reminder(&reminder);
        reminder.schedule_handle = match self.scheduler.schedule(&content, &trigger) {
            Ok(handle) => Some(handle),
            Err(err) => {
                self.log_degraded("notif_schedule", reminder.id, &err);
                None
            }
        };

        let mut next = Vec::with_capacity(self.store.reminders().len() + 1);
        next.push(reminder.clone());
        next.extend(self.store.reminders().iter().cloned());
        self.store.replace_all(next)?;

        info!(
            "event=reminder_create module=service status=ok reminder_id={} repeat={:?} scheduled={}",
            reminder.id,
            reminder.repeat,
            reminder.schedule_handle.is_some()
        );
        Ok(reminder)
    }

    /// Replaces the fields of an existing reminder in place, keeping its
    /// position in the sequence.
    ///
    /// The existing notification schedule is deliberately left untouched:
    /// when `repeat` or `occurs_at` change, the old trigger stays active
    /// until the reminder is deleted. This mirrors the shipped behavior.
    // TODO: decide with product whether edit should cancel + reschedule
    // when repeat or occurs_at change.
    pub fn edit(
        &mut self,
        id: ReminderId,
        draft: &ReminderDraft,
    ) -> Result<Reminder, LifecycleError> {
        let position = self
            .store
            .reminders()
            .iter()
            .position(|reminder| reminder.id == id)
            .ok_or(LifecycleError::NotFound(id))?;

        let mut next = self.store.reminders().to_vec();
        let updated = {
            let slot = &mut next[position];
            slot.title = draft.title.clone();
            slot.category = draft.category;
            slot.repeat = draft.repeat;
            slot.occurs_at = draft.occurs_at;
            slot.validate()?;
            slot.clone()
        };
        self.store.replace_all(next)?;

        info!(
            "event=reminder_edit module=service status=ok reminder_id={} repeat={:?}",
            updated.id, updated.repeat
        );
        Ok(updated)
    }

    /// Deletes a reminder, best-effort cancelling its notification first.
    ///
    /// Cancellation errors are swallowed: the notification may already
    /// have fired or expired on the platform side.
    pub fn delete(&mut self, id: ReminderId) -> Result<(), LifecycleError> {
        let position = self
            .store
            .reminders()
            .iter()
            .position(|reminder| reminder.id == id)
            .ok_or(LifecycleError::NotFound(id))?;

        if let Some(handle) = &self.store.reminders()[position].schedule_handle {
            if let Err(err) = self.scheduler.cancel(handle) {
                self.log_degraded("notif_cancel", id, &err);
            }
        }

        let mut next = self.store.reminders().to_vec();
        next.remove(position);
        self.store.replace_all(next)?;

        info!("event=reminder_delete module=service status=ok reminder_id={id}");
        Ok(())
    }

    fn log_degraded(&self, event: &str, id: ReminderId, err: &SchedulerError) {
        warn!("event={event} module=service status=degraded reminder_id={id} error={err}");
    }
}
