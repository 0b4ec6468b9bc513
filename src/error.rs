//! Error type shared by every stage of the borough pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading sources, joining boroughs, or writing output.
///
/// Nothing in the pipeline recovers from these; they propagate to the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("borough '{borough}' has no market count")]
    KeyNotFound { borough: String },
    /// `row` is 1-based: the CSV line for inspections, the position in
    /// `data` for markets.
    #[error("{source_name} row {row}: expected at least {expected} fields, found {found}")]
    DataShape {
        source_name: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{source_name} row {row}: field {index} is not a string")]
    FieldType {
        source_name: &'static str,
        row: usize,
        index: usize,
    },
}

impl PipelineError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PipelineError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
