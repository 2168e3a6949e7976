//! Domain model for reminder records.
//!
//! # Responsibility
//! - Define the canonical `Reminder` shape shared by store, service and
//!   scheduler layers.
//!
//! # Invariants
//! - Every reminder is identified by a stable `ReminderId`.
//! - Titles are never empty after trimming once a record is accepted.

pub mod reminder;
