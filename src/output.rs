//! Output formatting and persistence for borough summaries.
//!
//! Supports pretty-printed logging and atomic JSON file writes.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{PipelineError, Result};

/// Logs a summary as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Serializes `value` as JSON and replaces the file at `path` with it.
///
/// The bytes go to a sibling `<path>.<pid>.tmp` first and are renamed into
/// place, so a failed write never leaves a truncated file at `path`.
pub fn write_json_atomic(path: &Path, value: &impl Serialize) -> Result<()> {
    let body = serde_json::to_vec(value)?;
    let tmp = tmp_path(path);
    debug!(path = %path.display(), tmp = %tmp.display(), bytes = body.len(), "Writing JSON");

    if let Err(e) = write_and_sync(&tmp, &body) {
        let _ = fs::remove_file(&tmp);
        return Err(PipelineError::file_access(&tmp, e));
    }

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        PipelineError::file_access(path, e)
    })
}

fn write_and_sync(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(body)?;
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}.tmp", std::process::id()));
    PathBuf::from(name)
}
