use crate::analyzers::aggregate::summarize_grades;
use crate::analyzers::markets::count_markets;
use crate::analyzers::types::{BoroughGradeSummary, CombinedBoroughRecord};
use crate::analyzers::utility::{normalize_borough, ratio};
use crate::config::{CorrelateOptions, JoinPolicy};
use crate::error::{PipelineError, Result};
use crate::output::write_json_atomic;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Summarizes grades and counts markets, then joins them per borough.
///
/// # Errors
///
/// Propagates any failure from either source, and fails with
/// [`PipelineError::KeyNotFound`] when a graded borough has no market count.
#[tracing::instrument(skip_all, fields(
    grades = %grade_path.as_ref().display(),
    markets = %market_path.as_ref().display(),
))]
pub fn correlate(
    grade_path: impl AsRef<Path>,
    market_path: impl AsRef<Path>,
    options: &CorrelateOptions,
) -> Result<BTreeMap<String, CombinedBoroughRecord>> {
    let grades = summarize_grades(grade_path, &options.csv)?;
    let markets = count_markets(market_path)?;
    correlate_records(&grades, &markets, options.join)
}

/// Runs [`correlate`] and writes the combined mapping as JSON to `output_path`.
///
/// Nothing is written unless the whole computation succeeds, and the file is
/// replaced atomically.
#[tracing::instrument(skip_all, fields(output = %output_path.as_ref().display()))]
pub fn correlate_to_path(
    grade_path: impl AsRef<Path>,
    market_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &CorrelateOptions,
) -> Result<BTreeMap<String, CombinedBoroughRecord>> {
    let combined = correlate(grade_path, market_path, options)?;
    write_json_atomic(output_path.as_ref(), &combined)?;
    info!(boroughs = combined.len(), "Combined borough summary written");
    Ok(combined)
}

/// Joins a grade summary with market counts.
///
/// The grade summary's boroughs are authoritative: boroughs that only have
/// markets are dropped, and a graded borough with no markets is an error.
/// Output keys are the grade summary's borough names as given.
pub fn correlate_records(
    grades: &BTreeMap<String, BoroughGradeSummary>,
    markets: &BTreeMap<String, usize>,
    join: JoinPolicy,
) -> Result<BTreeMap<String, CombinedBoroughRecord>> {
    let mut combined = BTreeMap::new();

    for (borough, summary) in grades {
        let market_count = match join {
            JoinPolicy::Normalized => markets.get(&normalize_borough(borough)),
            JoinPolicy::Strict => markets.get(borough),
        }
        .copied()
        .ok_or_else(|| PipelineError::KeyNotFound {
            borough: borough.clone(),
        })?;

        let record = CombinedBoroughRecord {
            market_count,
            markets_per_restaurant: ratio(market_count, summary.restaurants),
        };
        debug!(
            borough = %borough,
            market_count,
            restaurants = summary.restaurants,
            ratio = record.markets_per_restaurant,
            "Borough joined"
        );
        combined.insert(borough.clone(), record);
    }

    let unmatched = markets.len().saturating_sub(combined.len());
    if unmatched > 0 {
        debug!(unmatched, "Market boroughs without graded restaurants dropped");
    }

    Ok(combined)
}
