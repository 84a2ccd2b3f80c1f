// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{attendance_to_row, get_headers};
use crate::export::{AttendanceExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const PRESENT_FILL: u32 = 0xC6EFCE;
const ABSENT_FILL: u32 = 0xFFC7CE;

/// Export XLSX with a styled header, auto column widths and a green/red
/// `present` column.
pub(crate) fn export_xlsx(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, a) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let fill = if a.present { PRESENT_FILL } else { ABSENT_FILL };

        for (col, value) in attendance_to_row(a).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, fill)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path_str(path)?)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, fill: u32) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(Color::RGB(fill))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match s {
        "true" | "false" => ws.write_with_format(row, col, s == "true", &fmt)?,
        _ => ws.write_with_format(row, col, s, &fmt)?,
    };
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
