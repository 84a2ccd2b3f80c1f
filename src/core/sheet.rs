//! Assignment sheet: loading and the platform → brand → details drill-down.

use crate::errors::AppResult;
use crate::models::Assignment;
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::Read;

/// Load the sheet from an http(s) URL (CSV export) or a local CSV file.
pub fn load(source: &str) -> AppResult<Vec<Assignment>> {
    if is_remote(source) {
        let body = reqwest::blocking::get(source)?
            .error_for_status()?
            .text()?;
        from_reader(body.as_bytes())
    } else {
        let file = File::open(expand_tilde(source))?;
        from_reader(file)
    }
}

pub fn is_remote(source: &str) -> bool {
    let s = source.trim_start().to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://")
}

/// Read assignments from CSV with a header row.
pub fn from_reader<R: Read>(reader: R) -> AppResult<Vec<Assignment>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: Assignment = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Unique platform names (lowercased, trimmed), sorted. Blank platforms are skipped.
pub fn platforms(rows: &[Assignment]) -> Vec<String> {
    let mut out: Vec<String> = rows
        .iter()
        .map(Assignment::normalized_platform)
        .filter(|p| !p.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Brands handled on `platform`, in sheet order, without duplicates.
pub fn brands_for_platform(rows: &[Assignment], platform: &str) -> Vec<String> {
    let wanted = platform.trim().to_lowercase();
    let mut out: Vec<String> = Vec::new();

    for row in rows.iter().filter(|r| r.normalized_platform() == wanted) {
        if !out.contains(&row.brand) {
            out.push(row.brand.clone());
        }
    }
    out
}

/// First sheet row for `brand` on `platform`. Brand names match exactly.
pub fn brand_details<'a>(
    rows: &'a [Assignment],
    platform: &str,
    brand: &str,
) -> Option<&'a Assignment> {
    let wanted = platform.trim().to_lowercase();
    rows.iter()
        .find(|r| r.normalized_platform() == wanted && r.brand == brand)
}
