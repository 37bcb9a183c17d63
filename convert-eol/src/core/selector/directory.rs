// src/core/selector/directory.rs
use crate::error::SetupError;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Ensures `dir` exists, creating it first when `create_if_missing` is set.
///
/// # Arguments
///
/// * `dir` - The directory that will be scanned
/// * `create_if_missing` - Create `dir` (and its parents) when it is absent
///
/// # Errors
///
/// Returns [`SetupError::DirectoryNotFound`] when the directory is absent and
/// either creation was not requested or it failed. A failed creation is kept
/// as the error source.
#[inline]
pub fn open_or_create_directory(dir: &Path, create_if_missing: bool) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    let source = if create_if_missing {
        fs::create_dir_all(dir).err()
    } else {
        None
    };

    if dir.is_dir() {
        Ok(())
    } else {
        Err(SetupError::DirectoryNotFound {
            path: dir.to_path_buf(),
            source,
        }
        .into())
    }
}

/// Lists every non-directory entry below `dir`, sorted by file name at each
/// level.
///
/// # Arguments
///
/// * `dir` - The directory to walk recursively
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Files and symlinks in traversal order
///
/// # Errors
///
/// Fails if any part of the tree cannot be traversed.
#[inline]
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        paths.push(entry.into_path());
    }

    Ok(paths)
}
