use serde::{Deserialize, Serialize};

/// One row of the shared assignment sheet.
///
/// Only the columns the dashboard shows are read; other columns are ignored
/// and missing cells become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "Platform", default)]
    pub platform: String,
    #[serde(rename = "Brand", default)]
    pub brand: String,
    #[serde(rename = "Tier", default)]
    pub tier: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Manager", default)]
    pub manager: String,
}

impl Assignment {
    /// Platform name as used for selection: lowercased and trimmed.
    pub fn normalized_platform(&self) -> String {
        self.platform.trim().to_lowercase()
    }
}
