mod common;

use apunta_core::{NoteDraft, NoteKind, NoteStatus, NotesStore, NOTES_KEY, REMINDERS_KEY, SUBJECTS_KEY};
use chrono::{Duration, Utc};
use common::{RecordingScheduler, SharedKvStore};
use serde_json::Value;

#[test]
fn collections_persist_as_json_arrays_with_historical_field_names() {
    let shared = SharedKvStore::new();
    let mut store = NotesStore::new(shared.clone(), RecordingScheduler::new());

    let subject = store.add_subject("Matemáticas", "#007AFF");
    let note = store.add_note(NoteDraft {
        title: "Ecuaciones".to_string(),
        content: "ax² + bx + c = 0".to_string(),
        subject_id: subject.id.clone(),
        class_name: Some("Álgebra II".to_string()),
        date: Utc::now(),
        time: "10:00".to_string(),
        status: NoteStatus::Pending,
        kind: NoteKind::Task,
        attachments: Vec::new(),
    });
    store
        .schedule_reminder(&note.id, "Repasar", "Mañana", Utc::now() + Duration::days(1))
        .unwrap();

    let subjects: Value = serde_json::from_str(&shared.raw(SUBJECTS_KEY).unwrap()).unwrap();
    let entry = &subjects.as_array().unwrap()[0];
    assert_eq!(entry["id"], Value::String(subject.id.clone()));
    assert!(entry["createdAt"].as_str().is_some());

    let notes: Value = serde_json::from_str(&shared.raw(NOTES_KEY).unwrap()).unwrap();
    let entry = &notes.as_array().unwrap()[0];
    assert_eq!(entry["subjectId"], Value::String(subject.id));
    assert_eq!(entry["type"], Value::String("task".to_string()));
    assert_eq!(entry["status"], Value::String("pending".to_string()));
    assert!(entry["className"].as_str().is_some());
    assert!(entry["reminderDate"].as_str().is_some());
    assert!(entry["notificationId"].as_str().is_some());
    assert!(entry["updatedAt"].as_str().is_some());

    let reminders: Value = serde_json::from_str(&shared.raw(REMINDERS_KEY).unwrap()).unwrap();
    let entry = &reminders.as_array().unwrap()[0];
    assert_eq!(entry["noteId"], Value::String(note.id));
    assert_eq!(entry["isActive"], Value::Bool(true));
    assert!(entry["scheduledDate"].as_str().is_some());
}
