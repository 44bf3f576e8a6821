//! Database operations using rusqlite.

use crate::checkins::types::{CheckinRecord, NewCheckin};
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::Path;
use thiserror::Error;

/// Timestamp format stored in the `created_at` column.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema. Idempotent, safe on every start.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        // Future migrations would go here:
        // if from_version < 2 { ... }

        Ok(())
    }

    /// Append a new check-in.
    ///
    /// Assigns `created_at` from the local clock at second precision; `id` is
    /// assigned by SQLite. No range validation happens here.
    pub fn insert_checkin(&self, checkin: &NewCheckin) -> Result<(), DatabaseError> {
        let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();

        self.conn
            .execute(
                "INSERT INTO daily_checkins (created_at, sleep_hours, stress, mood)
                 VALUES (?1, ?2, ?3, ?4)",
                params![created_at, checkin.sleep_hours, checkin.stress, checkin.mood],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Get up to `limit` most recent check-ins, newest first.
    pub fn recent_checkins(&self, limit: u32) -> Result<Vec<CheckinRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, created_at, sleep_hours, stress, mood
                 FROM daily_checkins
                 ORDER BY id DESC
                 LIMIT ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![limit], map_checkin_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut checkins = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            checkins.push(row.into_record()?);
        }

        Ok(checkins)
    }

    /// Get up to `n` most recent check-ins reordered oldest first.
    ///
    /// Chronological order for the weekly report window.
    pub fn last_checkins(&self, n: u32) -> Result<Vec<CheckinRecord>, DatabaseError> {
        let mut checkins = self.recent_checkins(n)?;
        checkins.reverse();
        Ok(checkins)
    }

    /// Count check-ins in the database.
    pub fn count_checkins(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM daily_checkins", [], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(count as usize)
    }
}

/// Intermediate row representation before timestamp parsing.
struct CheckinRow {
    id: i64,
    created_at: String,
    sleep_hours: f64,
    stress: u8,
    mood: u8,
}

impl CheckinRow {
    fn into_record(self) -> Result<CheckinRecord, DatabaseError> {
        let created_at = NaiveDateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT)
            .map_err(|e| {
                DatabaseError::DeserializationError(format!(
                    "bad created_at '{}': {}",
                    self.created_at, e
                ))
            })?;

        Ok(CheckinRecord {
            id: self.id,
            created_at,
            sleep_hours: self.sleep_hours,
            stress: self.stress,
            mood: self.mood,
        })
    }
}

fn map_checkin_row(row: &rusqlite::Row) -> rusqlite::Result<CheckinRow> {
    Ok(CheckinRow {
        id: row.get(0)?,
        created_at: row.get(1)?,
        sleep_hours: row.get(2)?,
        stress: row.get(3)?,
        mood: row.get(4)?,
    })
}

/// Database error types.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkin(sleep_hours: f64, stress: u8, mood: u8) -> NewCheckin {
        NewCheckin {
            sleep_hours,
            stress,
            mood,
        }
    }

    #[test]
    fn test_open_in_memory_creates_schema() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.count_checkins().unwrap(), 0);
        assert_eq!(db.get_schema_version().unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db.initialize().unwrap();
        assert_eq!(db.get_schema_version().unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_insert_and_round_trip() {
        let db = Database::open_in_memory().unwrap();
        db.insert_checkin(&checkin(7.5, 3, 8)).unwrap();

        let records = db.recent_checkins(1).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sleep_hours, 7.5);
        assert_eq!(records[0].stress, 3);
        assert_eq!(records[0].mood, 8);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let db = Database::open_in_memory().unwrap();
        db.insert_checkin(&checkin(6.0, 5, 5)).unwrap();
        let first_id = db.recent_checkins(1).unwrap()[0].id;

        db.insert_checkin(&checkin(8.0, 2, 9)).unwrap();
        let second_id = db.recent_checkins(1).unwrap()[0].id;

        assert!(second_id > first_id);
    }

    #[test]
    fn test_recent_checkins_newest_first() {
        let db = Database::open_in_memory().unwrap();
        for i in 1..=5 {
            db.insert_checkin(&checkin(i as f64, 5, 5)).unwrap();
        }

        let records = db.recent_checkins(3).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.windows(2).all(|w| w[0].id > w[1].id));
        assert_eq!(records[0].sleep_hours, 5.0);
    }

    #[test]
    fn test_last_checkins_chronological() {
        let db = Database::open_in_memory().unwrap();
        for i in 1..=5 {
            db.insert_checkin(&checkin(i as f64, 5, 5)).unwrap();
        }

        let records = db.last_checkins(3).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
        // Window covers the three most recent inserts
        assert_eq!(records[0].sleep_hours, 3.0);
        assert_eq!(records[2].sleep_hours, 5.0);
    }

    #[test]
    fn test_limit_larger_than_table() {
        let db = Database::open_in_memory().unwrap();
        db.insert_checkin(&checkin(7.0, 5, 6)).unwrap();

        assert_eq!(db.recent_checkins(10).unwrap().len(), 1);
        assert_eq!(db.last_checkins(7).unwrap().len(), 1);
    }
}
