// src/core/converter.rs
pub mod normalize;

pub use normalize::normalize_eol;

use crate::models::{CandidateFile, ConversionReport, Eol, FileOutcome};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Rewrites a single file in place when its line endings differ from `eol`.
///
/// # Arguments
///
/// * `path` - The file to normalize
/// * `eol` - The line terminator to write
///
/// # Returns
///
/// * `Ok(true)` - The file was rewritten
/// * `Ok(false)` - The file was already normalized and was not opened for writing
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The content is not valid UTF-8
/// * The file cannot be written back
#[inline]
pub fn convert_file(path: &Path, eol: Eol) -> Result<bool> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;

    let converted = normalize_eol(&text, eol);
    if converted == text {
        return Ok(false);
    }

    fs::write(path, converted).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Visits every file once, in order. A failing file is recorded and skipped.
///
/// # Arguments
///
/// * `files` - Selected files, in selection order
/// * `eol` - The line terminator to write
///
/// # Returns
///
/// * `ConversionReport` - One record per file plus converted/skipped/failed counts
#[must_use]
pub fn convert_files(files: &[CandidateFile], eol: Eol) -> ConversionReport {
    let mut report = ConversionReport::new();

    for file in files {
        let outcome = match convert_file(&file.path, eol) {
            Ok(true) => {
                tracing::debug!("Converted {} to {eol}", file.path.display());
                FileOutcome::Converted
            }
            Ok(false) => {
                tracing::debug!("Unchanged {}", file.path.display());
                FileOutcome::Unchanged
            }
            Err(err) => {
                tracing::warn!("Conversion of {} failed: {err:#}", file.path.display());
                FileOutcome::Failed(format!("{err:#}"))
            }
        };
        report.record(&file.path, outcome);
    }

    report
}
