//! Storage module for the check-in database and configuration.

pub mod config;
pub mod database;
pub mod schema;

pub use config::{load_config, AppConfig, CoachSettings, ConfigError};
pub use database::{Database, DatabaseError};
