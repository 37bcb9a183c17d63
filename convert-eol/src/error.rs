// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a run before any file is converted.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Directory {} not found and can't create", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Failed to read path list file: {}", path.display())]
    PathList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to load config file: {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
