// src/models/candidate_file.rs
use std::path::{Path, PathBuf};

/// A resolved, existing file chosen for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub extension: String,
}

impl CandidateFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let extension = file_extension(&path);
        Self { path, extension }
    }
}

/// Returns the file name suffix starting at its last `.`, leading dot included.
///
/// Dotfiles such as `.bashrc` count as pure extension. Names with no dot, or
/// ending in a dot, yield the empty string.
#[must_use]
pub fn file_extension(path: &Path) -> String {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return String::new();
    };
    match name.rfind('.') {
        Some(idx) if idx.saturating_add(1) < name.len() => name[idx..].to_owned(),
        _ => String::new(),
    }
}
