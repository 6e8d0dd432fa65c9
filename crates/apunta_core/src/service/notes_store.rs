//! The organizer's domain store.
//!
//! # Responsibility
//! - Own the subjects/notes/reminders collections and their consistency
//!   rules under create/update/delete.
//! - Persist each affected collection as a whole after every mutation.
//! - Couple the reminder lifecycle to the notification scheduler.
//!
//! # Invariants
//! - Deleting a subject removes its notes with full note-deletion
//!   semantics (notification cancelled, reminders pruned).
//! - Deleting a note removes every reminder referencing it.
//! - `schedule_reminder` is all-or-nothing: scheduler failure leaves both
//!   memory and storage untouched.
//! - Persistence failures are logged and swallowed; in-memory state is the
//!   operating truth until the next successful save.

use crate::model::note::{Note, NoteDraft, NoteUpdate};
use crate::model::reminder::Reminder;
use crate::model::subject::{Subject, SubjectUpdate};
use crate::notify::{NotificationScheduler, NotifyError};
use crate::storage::{KvStore, NOTES_KEY, REMINDERS_KEY, SUBJECTS_KEY};
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a fallible store operation.
///
/// Only the reminder-scheduling path reports errors; everything else
/// degrades to logged no-ops by design.
#[derive(Debug)]
pub enum StoreError {
    /// The note a reminder was requested for does not exist.
    NoteNotFound(String),
    /// The notification scheduler refused the request.
    Notification(NotifyError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Notification(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoteNotFound(_) => None,
            Self::Notification(err) => Some(err),
        }
    }
}

impl From<NotifyError> for StoreError {
    fn from(value: NotifyError) -> Self {
        Self::Notification(value)
    }
}

/// Owner of the three collections and every mutation over them.
///
/// Mutating operations take `&mut self`, so all mutations are serialized
/// by construction; there is no lost-update window between reading a
/// collection and persisting it.
pub struct NotesStore<S: KvStore, N: NotificationScheduler> {
    kv: S,
    scheduler: N,
    subjects: Vec<Subject>,
    notes: Vec<Note>,
    reminders: Vec<Reminder>,
    loading: bool,
}

impl<S: KvStore, N: NotificationScheduler> NotesStore<S, N> {
    /// Creates an empty store. Call [`load`](Self::load) before reading.
    pub fn new(kv: S, scheduler: N) -> Self {
        Self {
            kv,
            scheduler,
            subjects: Vec::new(),
            notes: Vec::new(),
            reminders: Vec::new(),
            loading: true,
        }
    }

    /// Reads all three collections from storage.
    ///
    /// A key that is absent, unreadable or undecodable leaves its
    /// collection empty (logged, never reported). When both subjects and
    /// notes come back empty, the sample data seeder runs — that emptiness
    /// check is the only guard against repeated seeding.
    pub fn load(&mut self) {
        self.subjects = load_collection(&self.kv, SUBJECTS_KEY);
        self.notes = load_collection(&self.kv, NOTES_KEY);
        self.reminders = load_collection(&self.kv, REMINDERS_KEY);
        self.loading = false;

        info!(
            "event=store_load module=service status=ok subjects={} notes={} reminders={}",
            self.subjects.len(),
            self.notes.len(),
            self.reminders.len()
        );

        if self.subjects.is_empty() && self.notes.is_empty() {
            self.initialize_sample_data();
        }
    }

    /// Whether [`load`](Self::load) has completed yet.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Access to the scheduler, for hosts that drive delivery themselves.
    pub fn scheduler(&mut self) -> &mut N {
        &mut self.scheduler
    }

    /// Creates a subject and returns the stored record.
    pub fn add_subject(&mut self, name: impl Into<String>, color: impl Into<String>) -> Subject {
        let subject = Subject::new(name, color);
        self.subjects.push(subject.clone());
        persist_collection(&mut self.kv, SUBJECTS_KEY, &self.subjects);
        subject
    }

    /// Merges `update` into the matching subject; silent no-op for an
    /// unknown id. The collection is persisted either way.
    pub fn update_subject(&mut self, id: &str, update: SubjectUpdate) {
        if let Some(subject) = self.subjects.iter_mut().find(|subject| subject.id == id) {
            update.apply(subject);
        }
        persist_collection(&mut self.kv, SUBJECTS_KEY, &self.subjects);
    }

    /// Deletes a subject and cascades: every note referencing it is
    /// removed with note-deletion semantics (live notification cancelled,
    /// reminders pruned).
    pub fn delete_subject(&mut self, id: &str) {
        self.subjects.retain(|subject| subject.id != id);

        let owned_note_ids: Vec<String> = self
            .notes
            .iter()
            .filter(|note| note.subject_id == id)
            .map(|note| note.id.clone())
            .collect();
        for note_id in &owned_note_ids {
            self.remove_note_record(note_id);
        }

        persist_collection(&mut self.kv, SUBJECTS_KEY, &self.subjects);
        persist_collection(&mut self.kv, NOTES_KEY, &self.notes);
        if !owned_note_ids.is_empty() {
            persist_collection(&mut self.kv, REMINDERS_KEY, &self.reminders);
        }
    }

    /// Creates a note from a draft and returns the stored record.
    pub fn add_note(&mut self, draft: NoteDraft) -> Note {
        let note = Note::from_draft(draft);
        self.notes.push(note.clone());
        persist_collection(&mut self.kv, NOTES_KEY, &self.notes);
        note
    }

    /// Shallow-merges `update` into the matching note and refreshes its
    /// `updated_at`; silent no-op for an unknown id. The collection is
    /// persisted either way.
    pub fn update_note(&mut self, id: &str, update: NoteUpdate) {
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            update.apply(note);
            note.updated_at = Utc::now();
        }
        persist_collection(&mut self.kv, NOTES_KEY, &self.notes);
    }

    /// Deletes a note: cancels its live notification (when any), removes
    /// the note and every reminder referencing it.
    pub fn delete_note(&mut self, id: &str) {
        self.remove_note_record(id);
        persist_collection(&mut self.kv, NOTES_KEY, &self.notes);
        persist_collection(&mut self.kv, REMINDERS_KEY, &self.reminders);
    }

    /// Schedules a reminder for a note.
    ///
    /// All-or-nothing: the note must exist and the scheduler call must
    /// succeed before any state is touched. On success the reminder is
    /// appended and persisted, then `reminder_date`/`notification_id` are
    /// written back onto the note.
    pub fn schedule_reminder(
        &mut self,
        note_id: &str,
        title: &str,
        message: &str,
        date: DateTime<Utc>,
    ) -> StoreResult<Reminder> {
        if !self.notes.iter().any(|note| note.id == note_id) {
            return Err(StoreError::NoteNotFound(note_id.to_string()));
        }

        let notification_id = match self.scheduler.schedule(title, message, date) {
            Ok(notification_id) => notification_id,
            Err(err) => {
                error!(
                    "event=reminder_schedule module=service status=error note_id={note_id} error={err}"
                );
                return Err(err.into());
            }
        };

        let reminder = Reminder::new(note_id, title, message, date, notification_id.clone());
        self.reminders.push(reminder.clone());
        persist_collection(&mut self.kv, REMINDERS_KEY, &self.reminders);

        self.update_note(
            note_id,
            NoteUpdate {
                reminder_date: Some(Some(date)),
                notification_id: Some(Some(notification_id)),
                ..NoteUpdate::default()
            },
        );

        info!(
            "event=reminder_schedule module=service status=ok note_id={note_id} reminder_id={}",
            reminder.id
        );
        Ok(reminder)
    }

    /// Cancels a reminder: drops its notification, removes the record and
    /// clears the mirror fields on the note. Silent no-op for an unknown
    /// id, so repeated calls are idempotent.
    pub fn cancel_reminder(&mut self, reminder_id: &str) {
        let Some(index) = self
            .reminders
            .iter()
            .position(|reminder| reminder.id == reminder_id)
        else {
            return;
        };

        let reminder = self.reminders.remove(index);
        if !reminder.notification_id.is_empty() {
            self.scheduler.cancel(&reminder.notification_id);
        }
        persist_collection(&mut self.kv, REMINDERS_KEY, &self.reminders);

        if self.notes.iter().any(|note| note.id == reminder.note_id) {
            self.update_note(
                &reminder.note_id,
                NoteUpdate {
                    reminder_date: Some(None),
                    notification_id: Some(None),
                    ..NoteUpdate::default()
                },
            );
        }
    }

    /// Removes one note from memory together with its reminders, after
    /// cancelling its live notification. Callers persist.
    fn remove_note_record(&mut self, id: &str) {
        let live_notification = self
            .notes
            .iter()
            .find(|note| note.id == id)
            .filter(|note| note.has_live_notification())
            .and_then(|note| note.notification_id.clone());
        if let Some(notification_id) = live_notification {
            self.scheduler.cancel(&notification_id);
        }

        self.notes.retain(|note| note.id != id);
        self.reminders.retain(|reminder| reminder.note_id != id);
    }
}

fn load_collection<S: KvStore, T: DeserializeOwned>(kv: &S, key: &str) -> Vec<T> {
    match kv.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                error!(
                    "event=store_load module=service collection={key} status=error error_code=decode_failed error={err}"
                );
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            error!(
                "event=store_load module=service collection={key} status=error error_code=read_failed error={err}"
            );
            Vec::new()
        }
    }
}

fn persist_collection<S: KvStore, T: Serialize>(kv: &mut S, key: &str, items: &[T]) {
    let raw = match serde_json::to_string(items) {
        Ok(raw) => raw,
        Err(err) => {
            error!(
                "event=store_save module=service collection={key} status=error error_code=encode_failed error={err}"
            );
            return;
        }
    };

    if let Err(err) = kv.set(key, &raw) {
        error!(
            "event=store_save module=service collection={key} status=error error_code=write_failed error={err}"
        );
    }
}
