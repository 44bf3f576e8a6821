//! Integration tests for the check-in store.

use chrono::Timelike;
use daylog::{Database, NewCheckin};

fn checkin(sleep_hours: f64, stress: u8, mood: u8) -> NewCheckin {
    NewCheckin {
        sleep_hours,
        stress,
        mood,
    }
}

#[test]
fn test_on_disk_database_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellness.db");

    {
        let db = Database::open(&path).unwrap();
        db.insert_checkin(&checkin(7.5, 3, 8)).unwrap();
    }

    // Reopen: initialize must be idempotent and the record still there.
    let db = Database::open(&path).unwrap();
    assert_eq!(db.count_checkins().unwrap(), 1);

    let records = db.recent_checkins(1).unwrap();
    assert_eq!(records[0].sleep_hours, 7.5);
    assert_eq!(records[0].stress, 3);
    assert_eq!(records[0].mood, 8);
}

#[test]
fn test_open_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("wellness.db");

    let db = Database::open(&path).unwrap();
    assert_eq!(db.count_checkins().unwrap(), 0);
    assert!(path.exists());
}

#[test]
fn test_query_orders_and_limits() {
    let db = Database::open_in_memory().unwrap();
    for i in 1..=12 {
        db.insert_checkin(&checkin(5.0 + i as f64 * 0.25, 5, 5))
            .unwrap();
    }

    let recent = db.recent_checkins(10).unwrap();
    assert_eq!(recent.len(), 10);
    assert!(recent.windows(2).all(|w| w[0].id > w[1].id));

    let window = db.last_checkins(7).unwrap();
    assert_eq!(window.len(), 7);
    assert!(window.windows(2).all(|w| w[0].id < w[1].id));

    // Both views cover the same newest record.
    assert_eq!(recent.first().unwrap().id, window.last().unwrap().id);
}

#[test]
fn test_new_record_id_exceeds_all_prior_ids() {
    let db = Database::open_in_memory().unwrap();
    for _ in 0..5 {
        db.insert_checkin(&NewCheckin::default()).unwrap();
    }
    let max_id = db
        .recent_checkins(10)
        .unwrap()
        .iter()
        .map(|r| r.id)
        .max()
        .unwrap();

    db.insert_checkin(&checkin(7.5, 3, 8)).unwrap();

    let newest = db.recent_checkins(1).unwrap();
    assert_eq!(newest.len(), 1);
    assert!(newest[0].id > max_id);
    assert_eq!(newest[0].sleep_hours, 7.5);
}

#[test]
fn test_created_at_has_second_precision() {
    let db = Database::open_in_memory().unwrap();
    db.insert_checkin(&NewCheckin::default()).unwrap();

    let record = db.recent_checkins(1).unwrap().remove(0);
    // Sub-second precision is intentionally dropped at insert time.
    assert_eq!(record.created_at.nanosecond(), 0);
}
