//! Core domain logic for Apunta, a personal note/task organizer.
//! This crate is the single source of truth for subjects, notes and
//! reminders and their consistency rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod query;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    Attachment, AttachmentKind, Note, NoteDraft, NoteKind, NoteStatus, NoteUpdate,
};
pub use model::reminder::Reminder;
pub use model::subject::{Subject, SubjectUpdate};
pub use notify::{
    LocalQueueScheduler, NotificationScheduler, NotifyError, NotifyResult, PendingNotification,
    PermissionStatus, UnsupportedScheduler,
};
pub use query::{active_reminders, filter_notes, notes_for_subject, subject_by_id, NoteFilter};
pub use service::notes_store::{NotesStore, StoreError, StoreResult};
pub use storage::sqlite::SqliteKvStore;
pub use storage::{
    KvStore, MemoryKvStore, StorageError, StorageResult, NOTES_KEY, REMINDERS_KEY, SUBJECTS_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
