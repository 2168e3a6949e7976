//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and scheduler calls into the reminder lifecycle
//!   API the UI consumes.
//! - Keep presentation layers decoupled from storage and platform
//!   details.

pub mod reminder_service;
