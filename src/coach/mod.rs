//! Narrative polishing via a remote wellness-coach text service.

pub mod client;
pub mod prompt;

pub use client::{CoachClient, CoachError};
