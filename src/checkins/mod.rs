//! Check-in records and form input types.

pub mod types;

pub use types::{CheckinRecord, NewCheckin};
