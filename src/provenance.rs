//! # Sample Identity Resolution
//!
//! Streams the external provenance report to map workflow run identifiers
//! to their root sample names.
//!
//! The report is gzip-compressed and tab-separated, with at least the
//! `Root Sample Name` and `Workflow Run SWID` columns. It is unbounded in
//! size, so resolution consumes it record-by-record through the csv reader
//! and never materializes it in memory; the reader also owns record
//! boundaries, so a decompression chunk can never split a logical row.

use crate::constants::provenance_columns::{ROOT_SAMPLE_NAME, WORKFLOW_RUN_SWID};
use crate::error::{ReportError, Result};
use flate2::read::GzDecoder;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::Read;
use tracing::info;

/// Run id → observed sample names. Normally a singleton set; zero matches
/// leave the id absent, repeated rows collapse, and several distinct
/// samples per run are all retained.
pub type SampleIndex = HashMap<String, BTreeSet<String>>;

/// Resolve sample names for the wanted run ids from a gzip TSV provenance
/// report.
///
/// Ids with no matching row are simply absent from the returned index,
/// not an error. Rows missing either consumed column are skipped. An
/// unreadable report, undecodable compression, or a header missing a
/// required column fails the whole resolution with a single error; the
/// caller decides whether to proceed without identity enrichment. There is
/// no per-identifier partial failure state.
pub fn resolve_samples<R: Read>(reader: R, wanted: &HashSet<String>) -> Result<SampleIndex> {
    let mut rows = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(GzDecoder::new(reader));

    let headers = rows
        .headers()
        .map_err(|e| ReportError::provenance(format!("unreadable report header: {e}")))?;
    let sample_column = column_index(headers, ROOT_SAMPLE_NAME)?;
    let run_column = column_index(headers, WORKFLOW_RUN_SWID)?;

    let mut index = SampleIndex::new();
    let mut scanned: u64 = 0;
    for row in rows.records() {
        let row = row.map_err(|e| ReportError::provenance(format!("unreadable report row: {e}")))?;
        scanned += 1;

        let (Some(sample), Some(run_id)) = (row.get(sample_column), row.get(run_column)) else {
            continue;
        };
        if sample.is_empty() || run_id.is_empty() || !wanted.contains(run_id) {
            continue;
        }
        index
            .entry(run_id.to_string())
            .or_default()
            .insert(sample.to_string());
    }

    info!(
        scanned_rows = scanned,
        resolved_runs = index.len(),
        wanted_runs = wanted.len(),
        "provenance scan complete"
    );
    Ok(index)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers.iter().position(|header| header == name).ok_or_else(|| {
        ReportError::provenance(format!("report is missing required column '{name}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip_report(lines: &[&str]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        for line in lines {
            writeln!(encoder, "{line}").unwrap();
        }
        encoder.finish().unwrap()
    }

    fn wanted(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_resolves_wanted_ids_only() {
        let report = gzip_report(&[
            "Root Sample Name\tStudy Title\tWorkflow Run SWID",
            "SAMPLE_1\tSTUDY\t111",
            "SAMPLE_2\tSTUDY\t222",
            "SAMPLE_3\tSTUDY\t333",
        ]);
        let index = resolve_samples(report.as_slice(), &wanted(&["111", "333"])).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index["111"].contains("SAMPLE_1"));
        assert!(index["333"].contains("SAMPLE_3"));
        assert!(!index.contains_key("222"));
    }

    #[test]
    fn test_unmatched_id_is_absent_not_an_error() {
        let report = gzip_report(&[
            "Root Sample Name\tWorkflow Run SWID",
            "SAMPLE_1\t111",
        ]);
        let index = resolve_samples(report.as_slice(), &wanted(&["999"])).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_repeated_rows_deduplicate() {
        let report = gzip_report(&[
            "Root Sample Name\tWorkflow Run SWID",
            "SAMPLE_1\t111",
            "SAMPLE_1\t111",
            "SAMPLE_1\t111",
        ]);
        let index = resolve_samples(report.as_slice(), &wanted(&["111"])).unwrap();
        assert_eq!(index["111"].len(), 1);
    }

    #[test]
    fn test_several_samples_per_run_all_retained() {
        let report = gzip_report(&[
            "Root Sample Name\tWorkflow Run SWID",
            "SAMPLE_1\t111",
            "SAMPLE_2\t111",
        ]);
        let index = resolve_samples(report.as_slice(), &wanted(&["111"])).unwrap();
        assert_eq!(index["111"].len(), 2);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let report = gzip_report(&[
            "Root Sample Name\tStudy Title\tWorkflow Run SWID",
            "SAMPLE_1",
            "SAMPLE_2\tSTUDY\t222",
        ]);
        let index = resolve_samples(report.as_slice(), &wanted(&["222"])).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_missing_required_column_fails_whole_resolution() {
        let report = gzip_report(&["Root Sample Name\tOther Column", "SAMPLE_1\tx"]);
        let result = resolve_samples(report.as_slice(), &wanted(&["111"]));
        assert!(matches!(result, Err(ReportError::Provenance { .. })));
    }

    #[test]
    fn test_undecodable_report_fails_whole_resolution() {
        let not_gzip = b"Root Sample Name\tWorkflow Run SWID\nSAMPLE_1\t111\n";
        let result = resolve_samples(not_gzip.as_slice(), &wanted(&["111"]));
        assert!(matches!(result, Err(ReportError::Provenance { .. })));
    }
}
