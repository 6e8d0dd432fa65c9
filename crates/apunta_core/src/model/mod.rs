//! Domain records for the organizer.
//!
//! # Responsibility
//! - Define the canonical Subject/Note/Reminder records and their
//!   serialized (persisted) shape.
//! - Provide draft and patch types for create/update operations.
//!
//! # Invariants
//! - Field names serialize in camelCase; enum values serialize lowercase.
//!   This is the historical on-disk layout and must not drift.

pub mod id;
pub mod note;
pub mod reminder;
pub mod subject;
