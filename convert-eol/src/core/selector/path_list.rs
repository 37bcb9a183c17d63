// src/core/selector/path_list.rs
use crate::error::SetupError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads one literal path per line. Empty lines are kept so the caller can
/// report them.
///
/// # Arguments
///
/// * `path_file` - Text file listing the paths, LF or CRLF separated
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - One entry per line, a leading UTF-8 BOM removed
///
/// # Errors
///
/// Returns [`SetupError::PathList`] if the file cannot be read as text.
#[inline]
pub fn read_path_list(path_file: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(path_file).map_err(|source| SetupError::PathList {
        path: path_file.to_path_buf(),
        source,
    })?;

    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(content.lines().map(PathBuf::from).collect())
}
