//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `apunta_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use apunta_core::{MemoryKvStore, NotesStore, UnsupportedScheduler};

fn main() {
    let mut store = NotesStore::new(MemoryKvStore::new(), UnsupportedScheduler);
    store.load();

    println!("apunta_core version={}", apunta_core::core_version());
    println!(
        "subjects={} notes={} reminders={}",
        store.subjects().len(),
        store.notes().len(),
        store.reminders().len()
    );
}
