use crate::core::auth::Credentials;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// CSV export of the shared assignment sheet.
pub const DEFAULT_SHEET_SOURCE: &str = "https://docs.google.com/spreadsheets/d/1W1BJWBI8nycdey0_3-F13WUQGI7Gjx5rgYGpjOvUq3Q/export?format=csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sheet_source")]
    pub sheet_source: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_notes")]
    pub show_notes: bool,
}

fn default_sheet_source() -> String {
    DEFAULT_SHEET_SOURCE.to_string()
}
fn default_username() -> String {
    "admin".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_notes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_source: default_sheet_source(),
            username: default_username(),
            password: "admin".to_string(),
            separator_char: default_separator_char(),
            show_notes: default_show_notes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("brandboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".brandboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("brandboard.conf")
    }

    /// Load the default config file, or defaults if it doesn't exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// First character of `separator_char`, used under table headers.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
