//! Incremental persistence: headers written once, rows appended across
//! repeated invocations against the same destination.

mod common;

use common::enriched;
use gantry_core::export::{append_metrics_csv, append_run_ids};
use gantry_core::models::EnrichedRun;
use std::fs;

#[test]
fn test_metrics_csv_created_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let runs = vec![enriched(
        "A1",
        "align",
        Some("2024-01-01T00:00:00"),
        Some("2024-01-01T01:00:00"),
    )];
    append_metrics_csv(&path, &runs).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "step_name,start_time,end_time,duration_seconds,run_id,auxiliary_max_duration,sample_name"
    );
    assert_eq!(lines.count(), 1);
}

#[test]
fn test_metrics_csv_appends_without_duplicating_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    append_metrics_csv(&path, &[enriched("A1", "align", None, None)]).unwrap();
    append_metrics_csv(&path, &[enriched("B2", "call", None, None)]).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let header_count = contents
        .lines()
        .filter(|line| line.starts_with("step_name,"))
        .count();
    assert_eq!(header_count, 1);
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn test_metrics_csv_row_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let mut run = enriched(
        "A1",
        "align",
        Some("2024-01-01T00:00:00"),
        Some("2024-01-01T01:00:00"),
    );
    run.run.duration_seconds = Some(3600.0);
    run.run.auxiliary_max_duration = 80.0;
    run.sample_name = Some("SAMPLE_7".to_string());
    append_metrics_csv(&path, &[run]).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let row = contents.lines().nth(1).unwrap();
    assert_eq!(
        row,
        "align,2024-01-01T00:00:00,2024-01-01T01:00:00,3600,A1,80,SAMPLE_7"
    );
}

#[test]
fn test_missing_fields_serialize_as_empty_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let runs: Vec<EnrichedRun> = vec![enriched("A1", "align", None, None)];
    append_metrics_csv(&path, &runs).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let row = contents.lines().nth(1).unwrap();
    assert_eq!(row, "align,,,,A1,0,");
}

#[test]
fn test_run_id_list_created_with_header_then_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflow_ids.txt");

    append_run_ids(&path, &["A1".to_string(), "B2".to_string()]).unwrap();
    append_run_ids(&path, &["C3".to_string()]).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines, vec!["workflow_run_id", "A1", "B2", "C3"]);
}
