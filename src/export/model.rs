// src/export/model.rs

use crate::models::AttendanceRow;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat attendance row, one per time slot, as written to export files.
#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    pub brand: String,
    pub date: String,
    pub time_slot: String,
    pub present: bool,
    pub notes: String,
}

impl AttendanceExport {
    pub fn from_rows(brand: &str, date: NaiveDate, rows: &[AttendanceRow]) -> Vec<Self> {
        let date = date.format("%Y-%m-%d").to_string();
        rows.iter()
            .map(|r| AttendanceExport {
                brand: brand.to_string(),
                date: date.clone(),
                time_slot: r.window_name.clone(),
                present: r.present,
                notes: r.note.to_string(),
            })
            .collect()
    }
}

/// Column headers for XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["brand", "date", "time_slot", "present", "notes"]
}

pub(crate) fn attendance_to_row(a: &AttendanceExport) -> Vec<String> {
    vec![
        a.brand.clone(),
        a.date.clone(),
        a.time_slot.clone(),
        a.present.to_string(),
        a.notes.clone(),
    ]
}
