pub mod brands;
pub mod chats;
pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::{self, Session};
use crate::core::chat_parser;
use crate::errors::{AppError, AppResult};
use crate::models::ChatRecord;
use crate::utils::label_from_path;
use std::fs;
use std::path::PathBuf;

/// Log in with the credentials given on the command line (or environment).
pub fn login(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    match (&cli.user, &cli.password) {
        (Some(user), Some(password)) => auth::login(&cfg.credentials(), user, password),
        _ => Err(AppError::MissingCredentials),
    }
}

/// Read every chat export and parse it under its file-name label.
pub(crate) fn load_chat_files(files: &[PathBuf]) -> AppResult<Vec<ChatRecord>> {
    let mut records = Vec::new();
    for path in files {
        let bytes = fs::read(path).map_err(|source| AppError::ChatFile {
            path: path.display().to_string(),
            source,
        })?;
        records.extend(chat_parser::parse_bytes(&bytes, &label_from_path(path)));
    }
    Ok(records)
}
