//! First-run sample content.
//!
//! # Invariants
//! - Seeding itself is not idempotent; the emptiness guard in
//!   `NotesStore::load` is what prevents duplicate seeding on each start.

use crate::model::note::{NoteDraft, NoteKind, NoteStatus};
use crate::notify::NotificationScheduler;
use crate::service::notes_store::NotesStore;
use crate::storage::KvStore;
use chrono::{Duration, Utc};
use log::info;

impl<S: KvStore, N: NotificationScheduler> NotesStore<S, N> {
    /// Populates the store with the fixed starter content: three subjects
    /// and four notes dated relative to now (one urgent task two days
    /// ahead, one completed note from yesterday, two pending today).
    pub fn initialize_sample_data(&mut self) {
        let math = self.add_subject("Matemáticas", "#007AFF");
        let history = self.add_subject("Historia", "#34C759");
        let physics = self.add_subject("Física", "#FF9500");

        let now = Utc::now();

        self.add_note(NoteDraft {
            title: "Ecuaciones Cuadráticas".to_string(),
            content: "Las ecuaciones cuadráticas tienen la forma ax² + bx + c = 0. \
                      Para resolverlas podemos usar la fórmula cuadrática: \
                      x = (-b ± √(b²-4ac)) / 2a"
                .to_string(),
            subject_id: math.id.clone(),
            class_name: Some("Álgebra II".to_string()),
            date: now,
            time: "10:00".to_string(),
            status: NoteStatus::Pending,
            kind: NoteKind::Note,
            attachments: Vec::new(),
        });

        self.add_note(NoteDraft {
            title: "Tarea: Resolver ejercicios 1-10".to_string(),
            content: "Completar los ejercicios del capítulo 5, páginas 120-125. \
                      Entregar el viernes."
                .to_string(),
            subject_id: math.id,
            class_name: None,
            date: now + Duration::days(2),
            time: "23:59".to_string(),
            status: NoteStatus::Urgent,
            kind: NoteKind::Task,
            attachments: Vec::new(),
        });

        self.add_note(NoteDraft {
            title: "La Revolución Francesa".to_string(),
            content: "Causas: Crisis económica, desigualdad social, ideas ilustradas. \
                      Desarrollo: Estados Generales (1789), Toma de la Bastilla, \
                      Declaración de Derechos."
                .to_string(),
            subject_id: history.id,
            class_name: Some("Historia Moderna".to_string()),
            date: now - Duration::days(1),
            time: "14:30".to_string(),
            status: NoteStatus::Completed,
            kind: NoteKind::Note,
            attachments: Vec::new(),
        });

        self.add_note(NoteDraft {
            title: "Leyes de Newton".to_string(),
            content: "1ª Ley (Inercia): Un objeto en reposo permanece en reposo. \
                      2ª Ley: F = ma. 3ª Ley: Acción y reacción."
                .to_string(),
            subject_id: physics.id,
            class_name: Some("Mecánica Clásica".to_string()),
            date: now,
            time: "11:15".to_string(),
            status: NoteStatus::Pending,
            kind: NoteKind::Note,
            attachments: Vec::new(),
        });

        info!("event=sample_seed module=service status=ok subjects=3 notes=4");
    }
}
