// src/models.rs
pub mod candidate_file;
pub mod conversion_report;
pub mod eol;
pub mod selection_options;

pub use candidate_file::{CandidateFile, file_extension};
pub use conversion_report::{ConversionReport, FileOutcome, FileRecord};
pub use eol::Eol;
pub use selection_options::{SelectionOptions, WILDCARD, canonical_extensions};
