//! Persistence layer: key/value contract and the reminder store.
//!
//! # Responsibility
//! - Define the storage contract the core writes through.
//! - Keep the canonical in-memory reminder sequence mirrored to storage.
//!
//! # Invariants
//! - `ReminderStore::replace_all` is the only mutation primitive; higher
//!   layers express create/edit/delete as "compute new sequence, then
//!   replace".

pub mod kv;
pub mod reminder_store;
