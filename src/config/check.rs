//! Detect config keys that are missing from the file or left empty.

use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub const REQUIRED_FIELDS: [&str; 5] = [
    "sheet_source",
    "username",
    "password",
    "separator_char",
    "show_notes",
];

/// Names of required keys absent from the YAML file at `path` or set to
/// an empty string. A missing file reports every key.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(REQUIRED_FIELDS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(REQUIRED_FIELDS.to_vec());
    };

    Ok(REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|key| match map.get(key) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        })
        .collect())
}
