#![allow(dead_code)]

//! Shared fakes for integration tests.

use apunta_core::{KvStore, NotificationScheduler, NotifyError, NotifyResult, PermissionStatus};
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One schedule call observed by [`RecordingScheduler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledCall {
    pub id: String,
    pub title: String,
    pub body: String,
    pub trigger_at: DateTime<Utc>,
}

/// Scheduler fake that records every call.
///
/// Ids are deterministic (`ntf-1`, `ntf-2`, ...). `fail_schedule` makes
/// every schedule call fail; `empty_ids` mimics a platform without
/// notification support while still recording the call.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    pub fail_schedule: bool,
    pub empty_ids: bool,
    pub scheduled: Vec<ScheduledCall>,
    pub cancelled: Vec<String>,
    counter: u32,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_schedule: true,
            ..Self::default()
        }
    }

    /// Mimics a platform without notification support: calls are recorded
    /// but every schedule yields an empty id.
    pub fn with_empty_ids() -> Self {
        Self {
            empty_ids: true,
            ..Self::default()
        }
    }
}

impl NotificationScheduler for RecordingScheduler {
    fn request_permission(&mut self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn schedule(
        &mut self,
        title: &str,
        body: &str,
        trigger_at: DateTime<Utc>,
    ) -> NotifyResult<String> {
        if self.fail_schedule {
            return Err(NotifyError::ScheduleFailed("backend rejected".to_string()));
        }

        self.counter += 1;
        let id = if self.empty_ids {
            String::new()
        } else {
            format!("ntf-{}", self.counter)
        };
        self.scheduled.push(ScheduledCall {
            id: id.clone(),
            title: title.to_string(),
            body: body.to_string(),
            trigger_at,
        });
        Ok(id)
    }

    fn cancel(&mut self, notification_id: &str) {
        self.cancelled.push(notification_id.to_string());
    }
}

/// In-memory key-value store whose contents are shared across clones, so a
/// test can hand "the same storage" to two consecutive store instances.
#[derive(Debug, Clone, Default)]
pub struct SharedKvStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SharedKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw persisted value, bypassing the store.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Seeds a raw persisted value, bypassing the store.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KvStore for SharedKvStore {
    fn get(&self, key: &str) -> apunta_core::StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> apunta_core::StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Key-value store where every operation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingKvStore;

impl KvStore for FailingKvStore {
    fn get(&self, _key: &str) -> apunta_core::StorageResult<Option<String>> {
        Err(apunta_core::StorageError::Backend("disk unavailable".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> apunta_core::StorageResult<()> {
        Err(apunta_core::StorageError::Backend("disk unavailable".to_string()))
    }
}
