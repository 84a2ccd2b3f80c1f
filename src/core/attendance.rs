//! Attendance report: did a brand send messages in each daily time slot?

use crate::models::{AttendanceRow, ChatRecord, TIME_WINDOWS};
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveTime};

/// Build the four-row report for `source_label` on `target_date`.
///
/// Records from other labels, other days, or without a parsed timestamp are
/// ignored. A window is present when at least one remaining message falls
/// inside it, bounds included.
pub fn report(
    records: &[ChatRecord],
    source_label: &str,
    target_date: NaiveDate,
) -> Vec<AttendanceRow> {
    let times: Vec<NaiveTime> = records
        .iter()
        .filter(|r| r.source_label == source_label && r.date() == Some(target_date))
        .filter_map(ChatRecord::time)
        .collect();

    bucket(&times)
}

/// Like [`report`], with the date given as `YYYY-MM-DD` text.
/// An unparseable date matches nothing, so every window is absent.
pub fn report_for_date_str(
    records: &[ChatRecord],
    source_label: &str,
    date_text: &str,
) -> Vec<AttendanceRow> {
    match parse_date(date_text) {
        Some(d) => report(records, source_label, d),
        None => bucket(&[]),
    }
}

fn bucket(times: &[NaiveTime]) -> Vec<AttendanceRow> {
    TIME_WINDOWS
        .iter()
        .map(|w| AttendanceRow::new(w.label(), times.iter().any(|t| w.contains(*t))))
        .collect()
}

/// Distinct source labels, in the order they first appear.
pub fn labels(records: &[ChatRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if !out.iter().any(|l| l == &r.source_label) {
            out.push(r.source_label.clone());
        }
    }
    out
}
