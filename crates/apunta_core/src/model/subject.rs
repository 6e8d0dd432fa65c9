//! Subject domain model.
//!
//! # Responsibility
//! - Define the user-facing category record grouping notes.
//!
//! # Invariants
//! - `id` is stable and never reused for another subject.
//! - `color` is free-form; no palette validation happens in core.

use crate::model::id::next_record_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-defined category (e.g. a class or topic) that groups notes.
///
/// Deleting a subject cascades to every note referencing it, and
/// transitively to those notes' reminders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Stable record id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color as an opaque string (typically a hex code).
    pub color: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

impl Subject {
    /// Creates a subject with a generated id and `created_at = now`.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: next_record_id(),
            name: name.into(),
            color: color.into(),
            created_at: Utc::now(),
        }
    }
}

/// Partial update for [`Subject`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SubjectUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl SubjectUpdate {
    /// Merges the set fields into `subject`.
    pub(crate) fn apply(self, subject: &mut Subject) {
        if let Some(name) = self.name {
            subject.name = name;
        }
        if let Some(color) = self.color {
            subject.color = color;
        }
    }
}
