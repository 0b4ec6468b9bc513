//! Pipeline options.
//!
//! Options can come from a JSON file, with every key optional:
//! ```json
//! {
//!   "csv": { "has_header": true },
//!   "join": "strict"
//! }
//! ```
//! CLI flags are applied on top of whatever the file sets.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PipelineError, Result};

/// How the inspection CSV is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Skip the first row. Off by default: the first row is scanned like any
    /// other, so a header only drops out if its grade cell is not a letter grade.
    pub has_header: bool,
}

/// How grade-summary boroughs are matched against market-count boroughs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinPolicy {
    /// Normalize the grade-side borough the same way market boroughs are
    /// normalized before looking it up.
    #[default]
    Normalized,
    /// Look up the grade-side borough exactly as it appears in the CSV.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorrelateOptions {
    pub csv: CsvOptions,
    pub join: JoinPolicy,
}

impl CorrelateOptions {
    /// Applies command-line overrides. `None` keeps the loaded value.
    pub fn with_overrides(mut self, has_header: Option<bool>, join: Option<JoinPolicy>) -> Self {
        if let Some(has_header) = has_header {
            self.csv.has_header = has_header;
        }
        if let Some(join) = join {
            self.join = join;
        }
        self
    }

    /// Loads options from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PipelineError::file_access(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}
