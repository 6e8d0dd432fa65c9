//! Read-only views over the current collections.
//!
//! # Responsibility
//! - Provide the filter/sort projections the screens render from.
//!
//! # Invariants
//! - Every function here is pure: no persisted state, no mutation.
//! - `filter_notes` ordering is deterministic — `date` descending.

use crate::model::note::{Note, NoteStatus};
use crate::model::reminder::Reminder;
use crate::model::subject::Subject;

/// Filter options for the notes list.
///
/// A blank or absent `search` matches every note; an absent `status`
/// matches every status.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Case-insensitive substring matched against title, content and
    /// class name.
    pub search: Option<String>,
    /// Exact workflow-status match.
    pub status: Option<NoteStatus>,
}

/// Applies `filter` and returns matching notes sorted by `date`
/// descending (newest first).
pub fn filter_notes<'a>(notes: &'a [Note], filter: &NoteFilter) -> Vec<&'a Note> {
    let needle = filter
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|needle| !needle.is_empty());

    let mut matched: Vec<&Note> = notes
        .iter()
        .filter(|note| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(note, needle))
                && filter.status.map_or(true, |status| note.status == status)
        })
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

fn matches_search(note: &Note, needle_lower: &str) -> bool {
    note.title.to_lowercase().contains(needle_lower)
        || note.content.to_lowercase().contains(needle_lower)
        || note
            .class_name
            .as_deref()
            .is_some_and(|class_name| class_name.to_lowercase().contains(needle_lower))
}

/// Returns reminders still marked active, in collection order.
pub fn active_reminders(reminders: &[Reminder]) -> Vec<&Reminder> {
    reminders
        .iter()
        .filter(|reminder| reminder.is_active)
        .collect()
}

/// Returns the notes belonging to one subject, in collection order.
pub fn notes_for_subject<'a>(notes: &'a [Note], subject_id: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| note.subject_id == subject_id)
        .collect()
}

/// Resolves a subject by id with a linear scan.
pub fn subject_by_id<'a>(subjects: &'a [Subject], id: &str) -> Option<&'a Subject> {
    subjects.iter().find(|subject| subject.id == id)
}
