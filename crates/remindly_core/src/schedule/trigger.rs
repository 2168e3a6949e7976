//! Trigger computation for reminder notifications.
//!
//! # Responsibility
//! - Map `(repeat, occurs_at)` onto the scheduler-facing trigger shape.
//!
//! # Invariants
//! - Pure and deterministic; recomputed fresh on every create call.
//! - Weekday indexing is 1-based with Sunday = 1, the convention the
//!   platform scheduler expects.

use crate::model::reminder::Repeat;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Scheduler-facing description of when a notification fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires once at an absolute instant, unix epoch milliseconds.
    At { epoch_ms: i64 },
    /// Fires every day at the given UTC wall-clock time.
    Daily { hour: u32, minute: u32 },
    /// Fires every week on the given weekday at the given UTC wall-clock
    /// time. Weekday is 1-based, Sunday = 1 through Saturday = 7.
    Weekly { weekday: u32, hour: u32, minute: u32 },
}

/// Computes the trigger for a reminder cadence anchored at `occurs_at_ms`.
///
/// For repeating cadences only the wall-clock components of the anchor
/// matter; the date part is discarded. Epoch values chrono cannot
/// represent clamp to the unix epoch rather than panic.
pub fn compute_trigger(repeat: Repeat, occurs_at_ms: i64) -> Trigger {
    match repeat {
        Repeat::None => Trigger::At {
            epoch_ms: occurs_at_ms,
        },
        Repeat::Daily => {
            let at = instant(occurs_at_ms);
            Trigger::Daily {
                hour: at.hour(),
                minute: at.minute(),
            }
        }
        Repeat::Weekly => {
            let at = instant(occurs_at_ms);
            Trigger::Weekly {
                weekday: at.weekday().num_days_from_sunday() + 1,
                hour: at.hour(),
                minute: at.minute(),
            }
        }
    }
}

fn instant(epoch_ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(epoch_ms).unwrap_or(DateTime::UNIX_EPOCH)
}
