//! Database schema definitions.

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// SQL for the schema version tracking table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL
);
"#;

/// SQL schema for the check-in table.
///
/// Append-only: nothing in the application issues UPDATE or DELETE against
/// this table, so `id` order and insertion order always agree.
pub const SCHEMA: &str = r#"
-- Daily check-ins table
CREATE TABLE IF NOT EXISTS daily_checkins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    sleep_hours REAL NOT NULL,
    stress INTEGER NOT NULL,
    mood INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_daily_checkins_created_at ON daily_checkins(created_at);
"#;
