//! Local notification scheduling port.
//!
//! # Responsibility
//! - Define the scheduler capability the domain store consumes.
//! - Provide the no-op implementation for platforms without notification
//!   support and an in-process queue for embedders that deliver
//!   notifications themselves.
//!
//! # Invariants
//! - `schedule` returns an opaque id later passed to `cancel`.
//! - An empty id means "nothing was scheduled"; `cancel` must tolerate ids
//!   it does not know.

use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Scheduling failure reported by a backend.
#[derive(Debug)]
pub enum NotifyError {
    ScheduleFailed(String),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScheduleFailed(message) => write!(f, "notification scheduling failed: {message}"),
        }
    }
}

impl Error for NotifyError {}

/// Outcome of a notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Capability to schedule and cancel local notifications.
pub trait NotificationScheduler {
    /// Asks the platform for notification permission.
    fn request_permission(&mut self) -> PermissionStatus;

    /// Schedules a notification at `trigger_at` and returns its opaque id.
    fn schedule(
        &mut self,
        title: &str,
        body: &str,
        trigger_at: DateTime<Utc>,
    ) -> NotifyResult<String>;

    /// Cancels a previously scheduled notification. Best-effort; unknown
    /// ids are ignored.
    fn cancel(&mut self, notification_id: &str);
}

/// Scheduler for platforms without local notification support.
///
/// `schedule` succeeds with an empty id, which downstream code treats as
/// "no live notification".
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedScheduler;

impl NotificationScheduler for UnsupportedScheduler {
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    fn schedule(
        &mut self,
        _title: &str,
        _body: &str,
        _trigger_at: DateTime<Utc>,
    ) -> NotifyResult<String> {
        Ok(String::new())
    }

    fn cancel(&mut self, _notification_id: &str) {}
}

/// One entry held by [`LocalQueueScheduler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNotification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub trigger_at: DateTime<Utc>,
}

/// In-process scheduler backed by a pending queue.
///
/// For embedders that deliver notifications themselves: the host shell
/// polls [`take_due`](Self::take_due) and presents whatever has come due.
#[derive(Debug, Clone, Default)]
pub struct LocalQueueScheduler {
    pending: Vec<PendingNotification>,
}

impl LocalQueueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries not yet delivered or cancelled, in scheduling order.
    pub fn pending(&self) -> &[PendingNotification] {
        &self.pending
    }

    /// Removes and returns every entry whose trigger instant is at or
    /// before `now`.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<PendingNotification> {
        let (due, still_pending) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|entry| entry.trigger_at <= now);
        self.pending = still_pending;
        due
    }
}

impl NotificationScheduler for LocalQueueScheduler {
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn schedule(
        &mut self,
        title: &str,
        body: &str,
        trigger_at: DateTime<Utc>,
    ) -> NotifyResult<String> {
        let id = Uuid::new_v4().to_string();
        self.pending.push(PendingNotification {
            id: id.clone(),
            title: title.to_string(),
            body: body.to_string(),
            trigger_at,
        });
        Ok(id)
    }

    fn cancel(&mut self, notification_id: &str) {
        self.pending.retain(|entry| entry.id != notification_id);
    }
}
