mod common;

use apunta_core::{
    MemoryKvStore, NoteDraft, NoteKind, NoteStatus, NotesStore, SubjectUpdate,
};
use chrono::Utc;
use common::{FailingKvStore, RecordingScheduler};

fn empty_store() -> NotesStore<MemoryKvStore, RecordingScheduler> {
    // Constructed without load() so the sample seeder never runs.
    NotesStore::new(MemoryKvStore::new(), RecordingScheduler::new())
}

fn draft_for(subject_id: &str, title: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: format!("contenido de {title}"),
        subject_id: subject_id.to_string(),
        class_name: None,
        date: Utc::now(),
        time: "12:00".to_string(),
        status: NoteStatus::Pending,
        kind: NoteKind::Note,
        attachments: Vec::new(),
    }
}

#[test]
fn add_subject_appends_exactly_one_matching_record() {
    let mut store = empty_store();

    let before = Utc::now();
    let subject = store.add_subject("Matemáticas", "#007AFF");

    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.subjects()[0], subject);
    assert_eq!(subject.name, "Matemáticas");
    assert_eq!(subject.color, "#007AFF");
    assert!(!subject.id.is_empty());
    assert!(subject.created_at >= before);

    let second = store.add_subject("Historia", "#34C759");
    assert_eq!(store.subjects().len(), 2);
    assert_ne!(subject.id, second.id);
}

#[test]
fn update_subject_merges_only_set_fields() {
    let mut store = empty_store();
    let subject = store.add_subject("Química", "#FF3B30");

    store.update_subject(
        &subject.id,
        SubjectUpdate {
            color: Some("#5AC8FA".to_string()),
            ..SubjectUpdate::default()
        },
    );

    let stored = &store.subjects()[0];
    assert_eq!(stored.name, "Química");
    assert_eq!(stored.color, "#5AC8FA");
    assert_eq!(stored.created_at, subject.created_at);
}

#[test]
fn update_subject_with_unknown_id_is_a_silent_noop() {
    let mut store = empty_store();
    let subject = store.add_subject("Química", "#FF3B30");

    store.update_subject(
        "does-not-exist",
        SubjectUpdate {
            name: Some("Alquimia".to_string()),
            ..SubjectUpdate::default()
        },
    );

    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.subjects()[0], subject);
}

#[test]
fn delete_subject_cascades_to_notes_and_their_reminders() {
    let mut store = empty_store();
    let doomed = store.add_subject("Matemáticas", "#007AFF");
    let kept = store.add_subject("Historia", "#34C759");

    let note_a = store.add_note(draft_for(&doomed.id, "Ecuaciones"));
    store.add_note(draft_for(&doomed.id, "Derivadas"));
    let unrelated = store.add_note(draft_for(&kept.id, "Revolución"));

    let reminder = store
        .schedule_reminder(&note_a.id, "Repasar", "Ecuaciones mañana", Utc::now())
        .unwrap();
    assert_eq!(store.reminders().len(), 1);

    store.delete_subject(&doomed.id);

    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.subjects()[0].id, kept.id);
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].id, unrelated.id);
    assert!(store.reminders().is_empty());
    assert_eq!(store.scheduler().cancelled, vec![reminder.notification_id]);
}

#[test]
fn delete_subject_with_unknown_id_leaves_everything_in_place() {
    let mut store = empty_store();
    let subject = store.add_subject("Física", "#FF9500");
    store.add_note(draft_for(&subject.id, "Leyes de Newton"));

    store.delete_subject("does-not-exist");

    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.notes().len(), 1);
}

#[test]
fn mutations_complete_in_memory_when_storage_writes_fail() {
    let mut store = NotesStore::new(FailingKvStore, RecordingScheduler::new());

    let subject = store.add_subject("Matemáticas", "#007AFF");
    store.add_note(draft_for(&subject.id, "Ecuaciones"));

    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.notes().len(), 1);
}
