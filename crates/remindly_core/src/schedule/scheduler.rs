//! Notification scheduler collaborator contract.
//!
//! # Responsibility
//! - Define the schedule/cancel/permission API the lifecycle service
//!   drives; the service is the only caller.
//! - Provide the in-process implementation used by tests and the CLI
//!   probe.
//!
//! # Invariants
//! - `cancel` is idempotent: cancelling an unknown, already-fired or
//!   already-cancelled handle is not an error.
//! - Scheduler failures are non-fatal to callers by contract; they are
//!   reported as values, never panics.

use crate::model::reminder::Reminder;
use crate::schedule::trigger::Trigger;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Opaque reference identifying a scheduled notification for later
/// cancellation.
pub type ScheduleHandle = String;

/// Result of the one-time startup permission query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Collaborator failure while scheduling or cancelling.
///
/// Always non-fatal: creation proceeds with no handle, cancellation
/// failures are swallowed by the caller.
#[derive(Debug)]
pub enum SchedulerError {
    Backend(String),
}

impl Display for SchedulerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "scheduler backend failure: {message}"),
        }
    }
}

impl Error for SchedulerError {}

/// What the platform renders when the notification fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

impl NotificationContent {
    /// Derives notification content from a reminder record: the title
    /// verbatim, the body from its category.
    pub fn for_reminder(reminder: &Reminder) -> Self {
        Self {
            title: reminder.title.clone(),
            body: format!("{} reminder", reminder.category),
        }
    }
}

/// Platform notification service contract.
pub trait NotificationScheduler {
    fn schedule(
        &self,
        content: &NotificationContent,
        trigger: &Trigger,
    ) -> Result<ScheduleHandle, SchedulerError>;

    /// Idempotent; safe on already-fired or already-cancelled handles.
    fn cancel(&self, handle: &ScheduleHandle) -> Result<(), SchedulerError>;

    /// Queried once at startup; denial is reported, never fatal.
    fn request_permission(&self) -> PermissionStatus;
}

/// One notification as recorded by [`InMemoryScheduler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledNotification {
    pub handle: ScheduleHandle,
    pub content: NotificationContent,
    pub trigger: Trigger,
}

#[derive(Default)]
struct SchedulerState {
    next_handle: u64,
    active: Vec<ScheduledNotification>,
    cancelled: Vec<ScheduleHandle>,
    permission: Option<PermissionStatus>,
    fail_next_schedule: bool,
    fail_next_cancel: bool,
}

/// In-process scheduler used by the CLI probe and tests.
///
/// Hands out monotonic handles and records every call. Cloning shares
/// the underlying state, so a caller can keep an inspection handle after
/// moving a clone into the service (the core runs single-threaded).
#[derive(Clone, Default)]
pub struct InMemoryScheduler {
    inner: Rc<RefCell<SchedulerState>>,
}

impl InMemoryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active (scheduled and not cancelled) notifications.
    pub fn scheduled(&self) -> Vec<ScheduledNotification> {
        self.inner.borrow().active.clone()
    }

    /// Handles passed to `cancel` so far, in call order.
    pub fn cancelled(&self) -> Vec<ScheduleHandle> {
        self.inner.borrow().cancelled.clone()
    }

    /// Makes the next `schedule` call fail, for degraded-path tests.
    pub fn fail_next_schedule(&self) {
        self.inner.borrow_mut().fail_next_schedule = true;
    }

    /// Makes the next `cancel` call fail, for degraded-path tests.
    pub fn fail_next_cancel(&self) {
        self.inner.borrow_mut().fail_next_cancel = true;
    }

    /// Overrides the permission answer returned to the service.
    pub fn set_permission(&self, status: PermissionStatus) {
        self.inner.borrow_mut().permission = Some(status);
    }
}

impl NotificationScheduler for InMemoryScheduler {
    fn schedule(
        &self,
        content: &NotificationContent,
        trigger: &Trigger,
    ) -> Result<ScheduleHandle, SchedulerError> {
        let mut state = self.inner.borrow_mut();
        if state.fail_next_schedule {
            state.fail_next_schedule = false;
            return Err(SchedulerError::Backend("schedule rejected".to_string()));
        }

        state.next_handle += 1;
        let handle = format!("notif-{}", state.next_handle);
        state.active.push(ScheduledNotification {
            handle: handle.clone(),
            content: content.clone(),
            trigger: *trigger,
        });
        Ok(handle)
    }

    fn cancel(&self, handle: &ScheduleHandle) -> Result<(), SchedulerError> {
        let mut state = self.inner.borrow_mut();
        if state.fail_next_cancel {
            state.fail_next_cancel = false;
            return Err(SchedulerError::Backend("cancel rejected".to_string()));
        }

        state.cancelled.push(handle.clone());
        state.active.retain(|notification| &notification.handle != handle);
        Ok(())
    }

    fn request_permission(&self) -> PermissionStatus {
        self.inner
            .borrow()
            .permission
            .unwrap_or(PermissionStatus::Granted)
    }
}
