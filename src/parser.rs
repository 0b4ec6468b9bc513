//! Readers for the two raw sources: inspection CSV and market JSON.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::analyzers::grade::LetterGrade;
use crate::analyzers::types::{InspectionRecord, MarketDocument};
use crate::config::CsvOptions;
use crate::error::{PipelineError, Result};

pub const INSPECTION_ID_FIELD: usize = 0;
pub const INSPECTION_BOROUGH_FIELD: usize = 1;
pub const INSPECTION_GRADE_FIELD: usize = 10;
pub const MARKET_BOROUGH_FIELD: usize = 8;

/// Opens `path` for reading, tagging failures with the path.
pub fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| PipelineError::file_access(path, e))
}

/// Reads every inspection row from `reader` in file order.
///
/// Rows may have differing lengths, but each must reach the grade column.
/// Rows are read as raw bytes and only the identifier, borough and grade
/// columns are decoded, so text in other columns may be in any encoding.
///
/// # Errors
///
/// Returns [`PipelineError::Csv`] for unreadable CSV and
/// [`PipelineError::DataShape`] for a row shorter than eleven fields.
pub fn parse_inspections<R: Read>(reader: R, options: &CsvOptions) -> Result<Vec<InspectionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(options.has_header)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for (index, result) in rdr.byte_records().enumerate() {
        let row = result?;
        if row.len() <= INSPECTION_GRADE_FIELD {
            return Err(PipelineError::DataShape {
                source_name: "inspections",
                row: row.position().map_or(index + 1, |p| p.line() as usize),
                expected: INSPECTION_GRADE_FIELD + 1,
                found: row.len(),
            });
        }

        records.push(InspectionRecord {
            restaurant_id: decode_field(&row[INSPECTION_ID_FIELD]),
            borough: decode_field(&row[INSPECTION_BOROUGH_FIELD]),
            grade: LetterGrade::parse(&decode_field(&row[INSPECTION_GRADE_FIELD])),
        });
    }

    debug!(rows = records.len(), "Inspection rows parsed");
    Ok(records)
}

fn decode_field(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Extracts the raw borough name of every market record, in document order.
///
/// # Errors
///
/// Returns [`PipelineError::Json`] for malformed JSON or a missing `data` key,
/// [`PipelineError::DataShape`] for a record shorter than nine fields and
/// [`PipelineError::FieldType`] when the borough field is not a string.
pub fn parse_market_boroughs(content: &str) -> Result<Vec<String>> {
    let document: MarketDocument = serde_json::from_str(content)?;

    let mut boroughs = Vec::with_capacity(document.data.len());

    for (index, record) in document.data.iter().enumerate() {
        let field = record
            .get(MARKET_BOROUGH_FIELD)
            .ok_or_else(|| PipelineError::DataShape {
                source_name: "markets",
                row: index + 1,
                expected: MARKET_BOROUGH_FIELD + 1,
                found: record.len(),
            })?;

        let borough = field.as_str().ok_or_else(|| PipelineError::FieldType {
            source_name: "markets",
            row: index + 1,
            index: MARKET_BOROUGH_FIELD,
        })?;

        boroughs.push(borough.to_string());
    }

    debug!(records = boroughs.len(), "Market records parsed");
    Ok(boroughs)
}
