// src/models/conversion_report.rs
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of visiting one selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted,
    Unchanged,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.outcome {
            FileOutcome::Converted => write!(f, "Success converted file: {path}"),
            FileOutcome::Unchanged => write!(f, "Ignore file: {path}"),
            FileOutcome::Failed(detail) => write!(f, "Converted file {path} failed: {detail}"),
        }
    }
}

/// Running tally of a conversion pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub converted: u64,
    pub skipped: u64,
    pub failed: u64,
    records: Vec<FileRecord>,
}

impl ConversionReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            converted: 0,
            skipped: 0,
            failed: 0,
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, path: &Path, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted => self.converted = self.converted.saturating_add(1),
            FileOutcome::Unchanged => self.skipped = self.skipped.saturating_add(1),
            FileOutcome::Failed(_) => self.failed = self.failed.saturating_add(1),
        }
        self.records.push(FileRecord {
            path: path.to_path_buf(),
            outcome,
        });
    }

    /// Number of files visited, whatever their outcome.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.converted
            .saturating_add(self.skipped)
            .saturating_add(self.failed)
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!("Converted {} files", self.converted)
    }
}
