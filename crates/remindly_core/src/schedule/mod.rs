//! Notification scheduling: trigger computation and the platform
//! scheduler contract.
//!
//! # Responsibility
//! - Map reminder cadence onto scheduler-facing trigger descriptions.
//! - Define the collaborator API the lifecycle service drives.

pub mod scheduler;
pub mod trigger;
