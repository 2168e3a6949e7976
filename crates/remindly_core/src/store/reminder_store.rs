//! Canonical in-memory reminder sequence with write-through persistence.
//!
//! # Responsibility
//! - Hold the ordered reminder sequence the UI renders from.
//! - Mirror every accepted mutation to the key/value store.
//!
//! # Invariants
//! - After a successful `replace_all`, the in-memory sequence and the
//!   persisted blob describe the same records in the same order.
//! - Loading never fails: missing or undecodable blobs degrade to an
//!   empty sequence instead of crashing.

use crate::model::reminder::Reminder;
use crate::store::kv::{KeyValueStore, StoreError, StoreResult};
use log::warn;

/// Fixed storage key holding the serialized reminder sequence.
pub const REMINDERS_KEY: &str = "reminders";

/// Ordered reminder sequence, source of truth for the list view.
pub struct ReminderStore<K: KeyValueStore> {
    kv: K,
    reminders: Vec<Reminder>,
}

impl<K: KeyValueStore> ReminderStore<K> {
    /// Loads the persisted sequence, degrading to empty on any read or
    /// decode failure.
    ///
    /// A damaged blob costs the stored list but never blocks startup; the
    /// degraded path is logged for diagnostics.
    pub fn load(kv: K) -> Self {
        let reminders = match kv.get(REMINDERS_KEY) {
            Ok(Some(blob)) => match serde_json::from_slice::<Vec<Reminder>>(&blob) {
                Ok(reminders) => reminders,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=degraded reason=undecodable_blob error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=store_load module=store status=degraded reason=read_failed error={err}");
                Vec::new()
            }
        };

        Self { kv, reminders }
    }

    /// Returns the canonical ordered sequence, newest first.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Swaps the in-memory sequence and writes it through to storage.
    ///
    /// The only mutation primitive. On a write failure the in-memory swap
    /// is kept and the error is surfaced; in-memory and persisted views
    /// then diverge until the next successful write. Callers treat the
    /// error as non-fatal.
    pub fn replace_all(&mut self, next: Vec<Reminder>) -> StoreResult<()> {
        self.reminders = next;
        let blob = serde_json::to_vec(&self.reminders).map_err(StoreError::Encode)?;
        self.kv.set(REMINDERS_KEY, &blob)
    }
}
