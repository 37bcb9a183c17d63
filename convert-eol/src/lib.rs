// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

pub use cli::{Args, usage_example};
pub use config::{ConfigFile, load_config, resolve_options};
pub use crate::core::converter::{convert_file, convert_files, normalize_eol};
pub use crate::core::selector::{ExtensionFilter, filter_candidates, select_files};
pub use error::SetupError;
pub use models::{CandidateFile, ConversionReport, Eol, FileOutcome, SelectionOptions};

use anyhow::Result;

/// Selects files, converts them and prints one line per file plus a summary.
///
/// # Errors
///
/// Returns an error only for setup failures (missing directory, unreadable
/// path list or config file). Per-file failures are part of the report.
pub fn run(args: Args) -> Result<ConversionReport> {
    let options = resolve_options(&args)?;
    tracing::debug!("Resolved options: {options:?}");

    let files = select_files(&options)?;
    let report = convert_files(&files, options.eol);

    for record in report.records() {
        println!("{record}");
    }
    println!("{}", report.summary());

    Ok(report)
}
