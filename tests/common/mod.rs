//! Shared builders for integration tests.
#![allow(dead_code)] // not every test binary uses every builder

use flate2::write::GzEncoder;
use flate2::Compression;
use gantry_core::models::{EnrichedRun, StepRecord, WorkflowRun};
use std::io::Write;

pub const AUXILIARY: &str = "provisionFileOut";

pub fn step(
    run_id: &str,
    step_name: &str,
    start: Option<&str>,
    end: Option<&str>,
    duration: Option<f64>,
) -> StepRecord {
    StepRecord {
        run_id: run_id.to_string(),
        step_name: step_name.to_string(),
        start_time: start.map(String::from),
        end_time: end.map(String::from),
        duration_seconds: duration,
    }
}

pub fn auxiliary_step(run_id: &str, duration: Option<f64>) -> StepRecord {
    step(run_id, AUXILIARY, None, None, duration)
}

pub fn enriched(
    run_id: &str,
    step_name: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> EnrichedRun {
    EnrichedRun::without_sample(WorkflowRun {
        run_id: run_id.to_string(),
        step_name: step_name.to_string(),
        start_time: start.map(String::from),
        end_time: end.map(String::from),
        duration_seconds: None,
        auxiliary_max_duration: 0.0,
    })
}

/// Gzip a line-oriented report for feeding the identity resolver.
pub fn gzip_report(lines: &[&str]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in lines {
        writeln!(encoder, "{line}").unwrap();
    }
    encoder.finish().unwrap()
}
