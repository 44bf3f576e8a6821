//! Daylog - Personal Daily Wellness Check-in
//!
//! Records daily sleep, stress and mood check-ins in a local SQLite
//! database, builds a deterministic weekly summary over the most recent
//! entries, and optionally has a remote coach service rephrase that summary
//! without changing its facts.

pub mod checkins;
pub mod coach;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use checkins::types::{CheckinRecord, NewCheckin};
pub use coach::client::{CoachClient, CoachError};
pub use report::weekly::generate_weekly_report;
pub use storage::config::{load_config, AppConfig};
pub use storage::database::{Database, DatabaseError};
