//! Unified application error type.
//! Sheet loading, config, auth and export all return AppError so the CLI
//! layer has a single place to report failures. The chat parser and the
//! attendance reporter never fail: malformed input degrades to "no data".

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data sources
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to download sheet: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read chat file '{path}': {source}")]
    ChatFile {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    // ---------------------------
    // Auth
    // ---------------------------
    #[error("Invalid username or password")]
    Unauthorized,

    #[error("Login required: pass --user and --password (or BRANDBOARD_USER / BRANDBOARD_PASSWORD)")]
    MissingCredentials,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
