// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::AttendanceExport;
use crate::export::xlsx::export_xlsx;
use crate::models::AttendanceRow;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export of one attendance report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the report rows for `brand` on `date` to `file`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `force`: overwrite without asking
    pub fn export(
        rows: &[AttendanceRow],
        brand: &str,
        date: NaiveDate,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let data = AttendanceExport::from_rows(brand, date, rows);

        match format {
            ExportFormat::Csv => export_csv(&data, path),
            ExportFormat::Json => export_json(&data, path),
            ExportFormat::Xlsx => export_xlsx(&data, path),
        }
    }
}
