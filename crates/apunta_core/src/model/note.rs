//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note/task record with inline attachments.
//! - Provide the creation draft and the partial-update patch type.
//!
//! # Invariants
//! - `subject_id` must reference an existing subject at creation time;
//!   this is enforced by the caller, not by the record.
//! - `updated_at` is refreshed by the store on every update.
//! - An empty `notification_id` means "no live notification" — it is kept
//!   in the persisted layout for compatibility with historical data.

use crate::model::id::next_record_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a note or task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    /// Created and still open.
    Pending,
    /// Done.
    Completed,
    /// Open and flagged as urgent.
    Urgent,
}

/// Whether a record is informational or actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Informational note.
    Note,
    /// Actionable task.
    Task,
}

/// Category of an embedded file reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Document,
}

/// A file reference embedded in one note.
///
/// Owned exclusively by its note; it has no independent lifecycle and its
/// id is supplied by the caller (the picker that produced it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub uri: String,
    /// Serialized as `type` to match the persisted layout.
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    /// Size in bytes when the picker reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Canonical note/task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable record id.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Forward key to the owning [`Subject`](crate::model::subject::Subject).
    pub subject_id: String,
    /// Optional class/course label, searchable alongside title and content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Instant the note is about (not the creation instant).
    pub date: DateTime<Utc>,
    /// Display time of day, e.g. `"10:00"`. Free-form.
    pub time: String,
    pub status: NoteStatus,
    /// Serialized as `type` to match the persisted layout.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    pub attachments: Vec<Attachment>,
    /// Mirror of the active reminder's trigger instant, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_date: Option<DateTime<Utc>>,
    /// Opaque scheduler id of the active reminder's notification. Empty on
    /// platforms without notification support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for note creation.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub subject_id: String,
    pub class_name: Option<String>,
    pub date: DateTime<Utc>,
    pub time: String,
    pub status: NoteStatus,
    pub kind: NoteKind,
    pub attachments: Vec<Attachment>,
}

impl Note {
    /// Builds a note from a draft, assigning id and both timestamps.
    pub fn from_draft(draft: NoteDraft) -> Self {
        let now = Utc::now();
        Self {
            id: next_record_id(),
            title: draft.title,
            content: draft.content,
            subject_id: draft.subject_id,
            class_name: draft.class_name,
            date: draft.date,
            time: draft.time,
            status: draft.status,
            kind: draft.kind,
            attachments: draft.attachments,
            reminder_date: None,
            notification_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this note holds a notification the scheduler knows about.
    pub fn has_live_notification(&self) -> bool {
        self.notification_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }
}

/// Partial update for [`Note`].
///
/// Outer `None` leaves a field untouched. For the clearable fields
/// (`class_name`, `reminder_date`, `notification_id`) the inner option
/// distinguishes setting a new value from clearing the field.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub subject_id: Option<String>,
    pub class_name: Option<Option<String>>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub status: Option<NoteStatus>,
    pub kind: Option<NoteKind>,
    pub attachments: Option<Vec<Attachment>>,
    pub reminder_date: Option<Option<DateTime<Utc>>>,
    pub notification_id: Option<Option<String>>,
}

impl NoteUpdate {
    /// Shorthand for a status-only change.
    pub fn status(status: NoteStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Merges the set fields into `note`. The store refreshes `updated_at`
    /// separately.
    pub(crate) fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(subject_id) = self.subject_id {
            note.subject_id = subject_id;
        }
        if let Some(class_name) = self.class_name {
            note.class_name = class_name;
        }
        if let Some(date) = self.date {
            note.date = date;
        }
        if let Some(time) = self.time {
            note.time = time;
        }
        if let Some(status) = self.status {
            note.status = status;
        }
        if let Some(kind) = self.kind {
            note.kind = kind;
        }
        if let Some(attachments) = self.attachments {
            note.attachments = attachments;
        }
        if let Some(reminder_date) = self.reminder_date {
            note.reminder_date = reminder_date;
        }
        if let Some(notification_id) = self.notification_id {
            note.notification_id = notification_id;
        }
    }
}
