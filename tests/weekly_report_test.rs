//! Integration tests for weekly report generation over stored check-ins.

use daylog::report::weekly::INSUFFICIENT_DATA_MESSAGE;
use daylog::{generate_weekly_report, Database, NewCheckin};

fn checkin(sleep_hours: f64, stress: u8, mood: u8) -> NewCheckin {
    NewCheckin {
        sleep_hours,
        stress,
        mood,
    }
}

#[test]
fn test_report_over_stored_window() {
    let db = Database::open_in_memory().unwrap();
    db.insert_checkin(&checkin(5.0, 8, 3)).unwrap();
    db.insert_checkin(&checkin(5.0, 8, 3)).unwrap();
    db.insert_checkin(&checkin(5.0, 8, 3)).unwrap();

    let window = db.last_checkins(7).unwrap();
    let report = generate_weekly_report(&window);

    assert!(report.starts_with("[Weekly Report]"));
    assert!(report.contains("- Sleep average: 5.0 h"));
    assert!(report.contains("- Stress average: 8.0 /10"));
    assert!(report.contains("- Mood average: 3.0 /10"));
    assert!(report.contains("- Sleep appears insufficient."));
    assert!(report.contains("- Stress appears elevated."));
    assert!(report.contains("- Mood appears low."));
    assert!(report.contains("[Recommendations]"));
}

#[test]
fn test_report_with_too_few_stored_records() {
    let db = Database::open_in_memory().unwrap();
    db.insert_checkin(&checkin(7.0, 5, 6)).unwrap();
    db.insert_checkin(&checkin(7.0, 5, 6)).unwrap();

    let window = db.last_checkins(7).unwrap();
    assert_eq!(generate_weekly_report(&window), INSUFFICIENT_DATA_MESSAGE);
}

#[test]
fn test_report_uses_only_the_last_seven_records() {
    let db = Database::open_in_memory().unwrap();
    // Three old short-sleep entries followed by seven healthy ones.
    for _ in 0..3 {
        db.insert_checkin(&checkin(3.0, 9, 2)).unwrap();
    }
    for _ in 0..7 {
        db.insert_checkin(&checkin(8.0, 2, 9)).unwrap();
    }

    let window = db.last_checkins(7).unwrap();
    let report = generate_weekly_report(&window);

    // The old entries fall outside the window, so no advisories fire.
    assert!(report.contains("- Sleep average: 8.0 h"));
    assert!(!report.contains("- Sleep appears insufficient."));
    assert!(!report.contains("- Stress appears elevated."));
    assert!(!report.contains("- Mood appears low."));
}
