//! Path utilities: expand ~ and derive chat labels from file names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Label for a chat export: its file name without a trailing `.txt`
/// (any case). "BrandX.txt" → "BrandX".
pub fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let cut = name.len().saturating_sub(4);
    if name.len() > 4 && name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".txt") {
        name[..cut].to_string()
    } else {
        name
    }
}
