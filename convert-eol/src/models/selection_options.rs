// src/models/selection_options.rs
use crate::models::Eol;
use std::path::PathBuf;

/// Extension allowlist entry that selects every file.
pub const WILDCARD: &str = "*";

/// Fully resolved options for one run.
///
/// Built from command-line flags and an optional config file; see
/// [`crate::config::resolve_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOptions {
    pub directory: Option<PathBuf>,
    pub path_file: Option<PathBuf>,
    pub allow_extensions: Vec<String>,
    pub deny_extensions: Vec<String>,
    pub eol: Eol,
    pub create_dir: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            directory: None,
            path_file: None,
            allow_extensions: vec![WILDCARD.to_owned()],
            deny_extensions: Vec::new(),
            eol: Eol::Lf,
            create_dir: false,
        }
    }
}

/// Trims entries, drops empty ones and prefixes a missing leading `.`.
#[must_use]
pub fn canonical_extensions<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.as_ref().trim())
        .filter(|e| !e.is_empty())
        .map(|e| {
            if e == WILDCARD || e.starts_with('.') {
                e.to_owned()
            } else {
                format!(".{e}")
            }
        })
        .collect()
}
