//! Core check-in types shared by storage, reporting and the UI.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Minimum sleep hours accepted by the entry form.
pub const SLEEP_HOURS_MIN: f64 = 0.0;
/// Maximum sleep hours accepted by the entry form.
pub const SLEEP_HOURS_MAX: f64 = 24.0;
/// Step size for the sleep hours input.
pub const SLEEP_HOURS_STEP: f64 = 0.5;
/// Lower bound of the stress and mood scales.
pub const SCALE_MIN: u8 = 1;
/// Upper bound of the stress and mood scales.
pub const SCALE_MAX: u8 = 10;

/// One saved daily check-in.
///
/// Records are immutable once stored: `id` and `created_at` are assigned by
/// the store on insert and never change, and no update or delete path exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    /// Row id, monotonically increasing with insertion order
    pub id: i64,
    /// Local wall-clock time at insert, second precision
    pub created_at: NaiveDateTime,
    /// Hours slept, 0-24
    pub sleep_hours: f64,
    /// Stress level, 1-10
    pub stress: u8,
    /// Mood level, 1-10
    pub mood: u8,
}

impl CheckinRecord {
    /// Timestamp formatted for list display.
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Form input for a new check-in.
///
/// Range enforcement happens in the entry surface (slider/drag-value bounds);
/// the store accepts these values as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NewCheckin {
    /// Hours slept
    pub sleep_hours: f64,
    /// Stress level
    pub stress: u8,
    /// Mood level
    pub mood: u8,
}

impl Default for NewCheckin {
    fn default() -> Self {
        Self {
            sleep_hours: 7.0,
            stress: 5,
            mood: 6,
        }
    }
}
