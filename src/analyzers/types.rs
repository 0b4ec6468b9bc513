//! Data types passed between the pipeline stages.

use serde::{Deserialize, Serialize};

use crate::analyzers::grade::LetterGrade;

/// One inspection row, reduced to the three columns the summary reads.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionRecord {
    pub restaurant_id: String,
    pub borough: String,
    pub grade: Option<LetterGrade>,
}

/// Restaurant count and mean score for a single borough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoroughGradeSummary {
    pub restaurants: usize,
    pub average_score: f64,
}

/// Market count and markets-per-restaurant ratio for a single borough.
///
/// Serialized as the two-element array `[market_count, ratio]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "(usize, f64)")]
pub struct CombinedBoroughRecord {
    pub market_count: usize,
    pub markets_per_restaurant: f64,
}

impl From<CombinedBoroughRecord> for (usize, f64) {
    fn from(record: CombinedBoroughRecord) -> Self {
        (record.market_count, record.markets_per_restaurant)
    }
}

/// The market dataset's top-level shape: `{"data": [[...], ...]}`.
///
/// Other top-level keys (the dataset `meta` block) are ignored.
#[derive(Debug, Deserialize)]
pub struct MarketDocument {
    pub data: Vec<Vec<serde_json::Value>>,
}
