use borough_rater::{
    CorrelateOptions, CsvOptions, JoinPolicy, PipelineError, correlate, correlate_to_path,
    count_markets, summarize_grades,
};
use std::env;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_output(name: &str) -> PathBuf {
    env::temp_dir().join(name)
}

#[test]
fn test_grade_summary_from_fixture() {
    let summary =
        summarize_grades(fixture("inspection_results.csv"), &CsvOptions::default()).unwrap();

    assert_eq!(summary.len(), 2);
    assert_eq!(summary["BRONX"].restaurants, 2);
    assert!((summary["BRONX"].average_score - 0.95).abs() < 1e-9);
    assert_eq!(summary["QUEENS"].restaurants, 1);
    assert!((summary["QUEENS"].average_score - 0.60).abs() < 1e-9);
}

#[test]
fn test_market_counts_from_fixture() {
    let counts = count_markets(fixture("green_markets.json")).unwrap();

    assert_eq!(counts["BRONX"], 2);
    assert_eq!(counts["QUEENS"], 1);
    assert_eq!(counts["STATEN ISLAND"], 1);
}

#[test]
fn test_full_pipeline_writes_expected_json() {
    let output = temp_output("borough_rater_it_full.json");
    let _ = fs::remove_file(&output);

    let combined = correlate_to_path(
        fixture("inspection_results.csv"),
        fixture("green_markets.json"),
        &output,
        &CorrelateOptions::default(),
    )
    .unwrap();

    assert_eq!(combined.len(), 2);
    assert!(!combined.contains_key("STATEN ISLAND"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"{"BRONX":[2,1.0],"QUEENS":[1,1.0]}"#
    );

    fs::remove_file(&output).unwrap();
}

#[test]
fn test_rerun_is_byte_identical() {
    let output = temp_output("borough_rater_it_rerun.json");
    let options = CorrelateOptions::default();

    correlate_to_path(
        fixture("inspection_results.csv"),
        fixture("green_markets.json"),
        &output,
        &options,
    )
    .unwrap();
    let first = fs::read(&output).unwrap();

    correlate_to_path(
        fixture("inspection_results.csv"),
        fixture("green_markets.json"),
        &output,
        &options,
    )
    .unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    fs::remove_file(&output).unwrap();
}

#[test]
fn test_header_flag_controls_first_row() {
    let path = fixture("inspection_results_header.csv");

    let skipped = summarize_grades(&path, &CsvOptions { has_header: true }).unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped["BRONX"].restaurants, 1);

    // The header's grade cell happens to read "A", so it is scored as a row.
    let scanned = summarize_grades(&path, &CsvOptions::default()).unwrap();
    assert_eq!(scanned["BORO"].restaurants, 1);
}

#[test]
fn test_unmatched_borough_leaves_no_output() {
    let output = temp_output("borough_rater_it_unmatched.json");
    let _ = fs::remove_file(&output);

    let options = CorrelateOptions {
        csv: CsvOptions { has_header: false },
        join: JoinPolicy::Strict,
    };
    let err = correlate_to_path(
        fixture("inspection_results_header.csv"),
        fixture("green_markets.json"),
        &output,
        &options,
    )
    .unwrap_err();

    assert!(matches!(err, PipelineError::KeyNotFound { ref borough } if borough == "BORO"));
    assert!(!output.exists());
}

#[test]
fn test_missing_inputs_are_file_access_errors() {
    let options = CorrelateOptions::default();

    let err = correlate(
        fixture("no_such_inspections.csv"),
        fixture("green_markets.json"),
        &options,
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::FileAccess { .. }));

    let err = correlate(
        fixture("inspection_results.csv"),
        fixture("no_such_markets.json"),
        &options,
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::FileAccess { .. }));
}
