//! # Durable Export Surface
//!
//! Flat tabular projections persisted incrementally: repeated invocations
//! against the same destination append rows, and the header is written
//! only when the destination is first created.

use crate::constants::{METRICS_CSV_HEADER, RUN_ID_LIST_HEADER};
use crate::error::{ReportError, Result};
use crate::models::EnrichedRun;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Append enriched runs to the flat metrics CSV, one row per run.
///
/// Columns: step name, start time, end time, duration, run id, auxiliary
/// max duration, sample name. Missing optional fields serialize as empty
/// cells.
pub fn append_metrics_csv(path: &Path, runs: &[EnrichedRun]) -> Result<()> {
    let destination = path.display().to_string();
    let file_exists = path.is_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ReportError::export(&destination, e.to_string()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !file_exists {
        writer
            .write_record(METRICS_CSV_HEADER)
            .map_err(|e| ReportError::export(&destination, e.to_string()))?;
    }
    for run in runs {
        let row = [
            run.run.step_name.clone(),
            run.run.start_time.clone().unwrap_or_default(),
            run.run.end_time.clone().unwrap_or_default(),
            run.run
                .duration_seconds
                .map(|seconds| seconds.to_string())
                .unwrap_or_default(),
            run.run.run_id.clone(),
            run.run.auxiliary_max_duration.to_string(),
            run.sample_name.clone().unwrap_or_default(),
        ];
        writer
            .write_record(&row)
            .map_err(|e| ReportError::export(&destination, e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ReportError::export(&destination, e.to_string()))?;

    info!(
        destination = %destination,
        rows = runs.len(),
        created = !file_exists,
        "metrics projection persisted"
    );
    Ok(())
}

/// Append run identifiers to the list export, one per line, with the
/// single header line written only on file creation.
pub fn append_run_ids(path: &Path, run_ids: &[String]) -> Result<()> {
    let destination = path.display().to_string();
    let file_exists = path.is_file();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ReportError::export(&destination, e.to_string()))?;

    if !file_exists {
        writeln!(file, "{RUN_ID_LIST_HEADER}")
            .map_err(|e| ReportError::export(&destination, e.to_string()))?;
    }
    for run_id in run_ids {
        writeln!(file, "{run_id}")
            .map_err(|e| ReportError::export(&destination, e.to_string()))?;
    }

    info!(
        destination = %destination,
        ids = run_ids.len(),
        created = !file_exists,
        "run identifier list persisted"
    );
    Ok(())
}
