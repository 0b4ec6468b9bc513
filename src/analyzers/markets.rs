use crate::analyzers::utility::normalize_borough;
use crate::error::{PipelineError, Result};
use crate::parser::{open_source, parse_market_boroughs};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Reads a market JSON document at `path` and counts markets per borough.
///
/// # Errors
///
/// Fails if the file cannot be opened, is not valid JSON, lacks a `data`
/// array, or holds a record without a borough string at index 8.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn count_markets(path: impl AsRef<Path>) -> Result<BTreeMap<String, usize>> {
    let path = path.as_ref();
    let mut content = String::new();
    open_source(path)?
        .read_to_string(&mut content)
        .map_err(|e| PipelineError::file_access(path, e))?;
    count_markets_str(&content)
}

/// Counts markets per normalized borough in an in-memory JSON document.
///
/// Boroughs with no markets are absent rather than zero.
pub fn count_markets_str(content: &str) -> Result<BTreeMap<String, usize>> {
    let boroughs = parse_market_boroughs(content)?;

    let mut markets: BTreeMap<String, usize> = BTreeMap::new();
    for borough in &boroughs {
        *markets.entry(normalize_borough(borough)).or_insert(0) += 1;
    }

    info!(
        records = boroughs.len(),
        boroughs = markets.len(),
        "Market counts computed"
    );
    Ok(markets)
}
