//! Weekly report generation.

pub mod weekly;

pub use weekly::{generate_weekly_report, WeeklyAverages, INSUFFICIENT_DATA_MESSAGE};
