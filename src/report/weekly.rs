//! Weekly report generation from check-in records.
//!
//! A pure transformation from an ordered slice of records to a fixed-format
//! text block: given identical input the output is byte-identical.

use crate::checkins::types::CheckinRecord;

/// Minimum number of records needed for a report.
pub const MIN_RECORDS_FOR_REPORT: usize = 3;

/// Message returned when fewer than [`MIN_RECORDS_FOR_REPORT`] records exist.
pub const INSUFFICIENT_DATA_MESSAGE: &str =
    "Not enough check-ins to build a report. Save at least 3 entries first.";

/// Sleep average below this many hours triggers the sleep advisory.
pub const SLEEP_LOW_THRESHOLD: f64 = 6.0;
/// Stress average at or above this level triggers the stress advisory.
pub const STRESS_HIGH_THRESHOLD: f64 = 7.0;
/// Mood average at or below this level triggers the mood advisory.
pub const MOOD_LOW_THRESHOLD: f64 = 4.0;

const REPORT_HEADER: &str = "[Weekly Report]";
const SLEEP_ADVISORY: &str = "- Sleep appears insufficient.";
const STRESS_ADVISORY: &str = "- Stress appears elevated.";
const MOOD_ADVISORY: &str = "- Mood appears low.";
const RECOMMENDATIONS_HEADER: &str = "[Recommendations]";
const RECOMMENDATIONS: [&str; 3] = [
    "- Keep a consistent bedtime.",
    "- Take a light ten-minute walk each day.",
    "- Cut back on afternoon caffeine.",
];

/// Arithmetic means over a set of check-ins, rounded to 2 decimal places.
///
/// Order of the input records does not affect the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyAverages {
    /// Mean sleep hours
    pub sleep_hours: f64,
    /// Mean stress level
    pub stress: f64,
    /// Mean mood level
    pub mood: f64,
}

impl WeeklyAverages {
    /// Compute averages over the given records.
    ///
    /// Returns `None` when fewer than [`MIN_RECORDS_FOR_REPORT`] records are
    /// available.
    pub fn from_records(records: &[CheckinRecord]) -> Option<Self> {
        if records.len() < MIN_RECORDS_FOR_REPORT {
            return None;
        }

        let count = records.len() as f64;
        let sleep_sum: f64 = records.iter().map(|r| r.sleep_hours).sum();
        let stress_sum: f64 = records.iter().map(|r| f64::from(r.stress)).sum();
        let mood_sum: f64 = records.iter().map(|r| f64::from(r.mood)).sum();

        Some(Self {
            sleep_hours: round2(sleep_sum / count),
            stress: round2(stress_sum / count),
            mood: round2(mood_sum / count),
        })
    }
}

/// Generate the weekly report text from the given records.
///
/// With fewer than three records this returns [`INSUFFICIENT_DATA_MESSAGE`].
/// Otherwise the output has a fixed structure: header, three average lines,
/// a blank line, zero or more advisory lines, a blank line, and three fixed
/// recommendation lines.
pub fn generate_weekly_report(records: &[CheckinRecord]) -> String {
    let Some(averages) = WeeklyAverages::from_records(records) else {
        return INSUFFICIENT_DATA_MESSAGE.to_string();
    };

    let mut lines = Vec::new();
    lines.push(REPORT_HEADER.to_string());
    lines.push(format!(
        "- Sleep average: {} h",
        format_average(averages.sleep_hours)
    ));
    lines.push(format!(
        "- Stress average: {} /10",
        format_average(averages.stress)
    ));
    lines.push(format!(
        "- Mood average: {} /10",
        format_average(averages.mood)
    ));
    lines.push(String::new());

    // Advisories compare against the rounded averages, in fixed order.
    if averages.sleep_hours < SLEEP_LOW_THRESHOLD {
        lines.push(SLEEP_ADVISORY.to_string());
    }
    if averages.stress >= STRESS_HIGH_THRESHOLD {
        lines.push(STRESS_ADVISORY.to_string());
    }
    if averages.mood <= MOOD_LOW_THRESHOLD {
        lines.push(MOOD_ADVISORY.to_string());
    }

    lines.push(String::new());
    lines.push(RECOMMENDATIONS_HEADER.to_string());
    for recommendation in RECOMMENDATIONS {
        lines.push(recommendation.to_string());
    }

    lines.join("\n")
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a rounded average with the fewest decimals that preserve it,
/// keeping at least one (7.0 not 7, 7.5 not 7.50, 6.33 as-is).
fn format_average(value: f64) -> String {
    let hundredths = (value * 100.0).round() as i64;
    if hundredths % 10 == 0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}
