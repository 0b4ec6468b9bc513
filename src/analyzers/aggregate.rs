use crate::analyzers::grade::LetterGrade;
use crate::analyzers::types::{BoroughGradeSummary, InspectionRecord};
use crate::config::CsvOptions;
use crate::error::Result;
use crate::parser::{open_source, parse_inspections};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// A restaurant's retained grade after de-duplication.
struct GradedRestaurant<'a> {
    borough: &'a str,
    grade: LetterGrade,
}

/// Reads an inspection CSV at `path` and summarizes grades per borough.
///
/// # Errors
///
/// Fails if the file cannot be opened, is not valid CSV, or holds a row
/// too short to carry a grade.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn summarize_grades(
    path: impl AsRef<Path>,
    options: &CsvOptions,
) -> Result<BTreeMap<String, BoroughGradeSummary>> {
    let file = open_source(path.as_ref())?;
    summarize_reader(file, options)
}

/// Summarizes inspection CSV data from any reader. See [`summarize_grades`].
pub fn summarize_reader<R: Read>(
    reader: R,
    options: &CsvOptions,
) -> Result<BTreeMap<String, BoroughGradeSummary>> {
    let records = parse_inspections(reader, options)?;
    let summary = summarize_records(&records);
    info!(
        rows = records.len(),
        boroughs = summary.len(),
        "Grade summary computed"
    );
    Ok(summary)
}

/// Groups inspection rows into a per-borough restaurant count and mean score.
///
/// Each restaurant is counted once, with the first row carrying a valid grade
/// deciding its score for good. Later rows for the same restaurant are ignored
/// even if they are more recent. Rows without a valid grade never claim an
/// identifier. Borough names are used exactly as they appear.
pub fn summarize_records(records: &[InspectionRecord]) -> BTreeMap<String, BoroughGradeSummary> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut retained = Vec::new();

    for record in records {
        let Some(grade) = record.grade else {
            continue;
        };
        if seen.insert(record.restaurant_id.as_str()) {
            retained.push(GradedRestaurant {
                borough: &record.borough,
                grade,
            });
        }
    }

    debug!(restaurants = retained.len(), "Restaurants de-duplicated");

    // Scores are summed in file order so repeated runs agree to the last bit.
    let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for restaurant in &retained {
        let entry = totals.entry(restaurant.borough).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += restaurant.grade.score();
    }

    totals
        .into_iter()
        .map(|(borough, (count, score_sum))| {
            (
                borough.to_string(),
                BoroughGradeSummary {
                    restaurants: count,
                    average_score: score_sum / count as f64,
                },
            )
        })
        .collect()
}
