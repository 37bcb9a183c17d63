// src/core/selector.rs
pub mod directory;
pub mod extension;
pub mod path_list;

pub use directory::{open_or_create_directory, scan_directory};
pub use extension::ExtensionFilter;
pub use path_list::read_path_list;

use crate::models::{CandidateFile, SelectionOptions, file_extension};
use anyhow::Result;
use std::path::PathBuf;

/// Resolves the ordered list of files to convert.
///
/// Directory results come first, then path-list results. Nothing is
/// deduplicated across the two sources.
///
/// # Arguments
///
/// * `options` - Sources, extension lists and directory creation switch
///
/// # Returns
///
/// * `Ok(Vec<CandidateFile>)` - Existing regular files that passed the extension filter
///
/// # Errors
///
/// This function may return an error if:
/// * The directory is missing and could not (or was not asked to) be created
/// * The directory tree cannot be traversed
/// * The path list file cannot be read
pub fn select_files(options: &SelectionOptions) -> Result<Vec<CandidateFile>> {
    let filter = ExtensionFilter::new(
        options.allow_extensions.as_slice(),
        options.deny_extensions.as_slice(),
    );
    let mut selected = Vec::new();

    if let Some(dir) = &options.directory {
        open_or_create_directory(dir, options.create_dir)?;
        let paths = scan_directory(dir)?;
        tracing::trace!("Found {} entries under {}", paths.len(), dir.display());
        selected.extend(filter_candidates(paths, &filter));
    }

    if let Some(path_file) = &options.path_file {
        let paths = read_path_list(path_file)?;
        tracing::trace!("Read {} lines from {}", paths.len(), path_file.display());
        selected.extend(filter_candidates(paths, &filter));
    }

    Ok(selected)
}

/// Keeps the existing regular files whose extension passes `filter`, in input
/// order.
#[must_use]
pub fn filter_candidates(paths: Vec<PathBuf>, filter: &ExtensionFilter) -> Vec<CandidateFile> {
    let mut selected = Vec::new();

    for path in paths {
        if path.as_os_str().is_empty() {
            tracing::info!("Ignore file: <empty path entry>");
            continue;
        }
        if !path.exists() {
            tracing::info!("Ignore file: {} (missing)", path.display());
            continue;
        }
        if !path.is_file() {
            tracing::info!("Ignore file: {} (not a regular file)", path.display());
            continue;
        }

        let extension = file_extension(&path);
        if filter.accepts(&extension) {
            tracing::info!("Selected file: {}", path.display());
            selected.push(CandidateFile { path, extension });
        } else {
            tracing::info!("Ignore file: {} (extension filtered)", path.display());
        }
    }

    selected
}
