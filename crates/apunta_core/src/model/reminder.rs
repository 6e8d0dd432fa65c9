//! Reminder domain model.
//!
//! # Invariants
//! - `note_id` references an existing note at creation time (validated by
//!   the store); the reference is not re-validated afterwards.
//! - `notification_id` is the scheduler's opaque id; empty on platforms
//!   without notification support.

use crate::model::id::next_record_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled future notification tied to one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Stable record id.
    pub id: String,
    /// Forward key to the note this reminder belongs to.
    pub note_id: String,
    pub title: String,
    pub message: String,
    /// Trigger instant handed to the scheduler.
    pub scheduled_date: DateTime<Utc>,
    /// Opaque scheduler id, empty where notifications are unsupported.
    pub notification_id: String,
    pub is_active: bool,
}

impl Reminder {
    /// Creates an active reminder with a generated id.
    pub fn new(
        note_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        scheduled_date: DateTime<Utc>,
        notification_id: impl Into<String>,
    ) -> Self {
        Self {
            id: next_record_id(),
            note_id: note_id.into(),
            title: title.into(),
            message: message.into(),
            scheduled_date,
            notification_id: notification_id.into(),
            is_active: true,
        }
    }
}
