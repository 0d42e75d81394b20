//! # Report Pipeline
//!
//! One-shot batch orchestration of the reporting core: identifier
//! extraction, then the identity-resolution and run-aggregation branches
//! on independent scoped threads, joined deterministically by run id, then
//! dependency grouping.
//!
//! The join on run id is the only synchronization barrier. Identity
//! resolution is optional: its failure degrades gracefully to unset sample
//! names, while an empty input short-circuits as an informational outcome
//! rather than an error. There is no internal cancellation primitive; a
//! caller that wants cancellation wraps the whole invocation.

use crate::aggregation::aggregate_runs;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::extraction::extract_run_ids;
use crate::grouping::{group_runs, RunGrouping};
use crate::models::{DependencySpec, EnrichedRun, StepRecord};
use crate::provenance::{resolve_samples, SampleIndex};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use tracing::{info, warn};

/// Everything one invocation consumes. All inputs are injected; the
/// pipeline never opens the external metrics store itself.
pub struct ReportInputs<R: Read + Send> {
    /// Identifier-bearing nested document; `None` when the caller already
    /// scoped the step records externally.
    pub identifier_document: Option<serde_json::Value>,
    /// Raw step records, pre-filtered by the external store.
    pub step_records: Vec<StepRecord>,
    /// Gzip TSV provenance report; `None` skips identity enrichment.
    pub provenance: Option<R>,
    /// Declared run order and dependency graph; `None` skips the declared
    /// ordering and edge derivation.
    pub dependency_spec: Option<DependencySpec>,
}

/// Why an invocation terminated early without producing a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoRunIdentifiers,
    NoStepRecords,
    NoCanonicalRuns,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EmptyReason::NoRunIdentifiers => "no run identifiers found",
            EmptyReason::NoStepRecords => "no step records supplied",
            EmptyReason::NoCanonicalRuns => "no canonical runs after aggregation",
        };
        write!(f, "{text}")
    }
}

/// Terminal outcome of a pipeline invocation. Empty inputs are reported
/// informationally, distinct from failure.
#[derive(Debug)]
pub enum PipelineOutcome {
    Complete(ReportBundle),
    Empty(EmptyReason),
}

/// The ordered, enriched output handed to the export surface.
#[derive(Debug)]
pub struct ReportBundle {
    /// Identifiers extracted from the input document, duplicates retained;
    /// empty when no document was supplied.
    pub run_ids: Vec<String>,
    /// Full resolution index, including runs with several sample names.
    pub samples: SampleIndex,
    /// Enriched runs in aggregation order (first appearance of each run id).
    pub runs: Vec<EnrichedRun>,
    /// Temporal ordering, declared ordering, and dependency edges.
    pub grouping: RunGrouping,
}

/// Run the whole reporting pipeline over one set of inputs.
///
/// The resolver and aggregator branches execute concurrently; resolver
/// failure is logged and degrades to unset sample names, while aggregation
/// is required. When the provenance index yields several sample names for
/// one run, the lexicographically first enriches the flat record and the
/// full set stays available in the bundle.
pub fn run_report<R: Read + Send>(
    config: &ReportConfig,
    inputs: ReportInputs<R>,
) -> Result<PipelineOutcome> {
    let ReportInputs {
        identifier_document,
        step_records,
        provenance,
        dependency_spec,
    } = inputs;

    let run_ids = match &identifier_document {
        Some(document) => extract_run_ids(document, &config.run_id_key),
        None => Vec::new(),
    };
    if identifier_document.is_some() {
        info!(
            key = %config.run_id_key,
            count = run_ids.len(),
            "extracted run identifiers"
        );
        if run_ids.is_empty() {
            return Ok(PipelineOutcome::Empty(EmptyReason::NoRunIdentifiers));
        }
    }
    if step_records.is_empty() {
        return Ok(PipelineOutcome::Empty(EmptyReason::NoStepRecords));
    }

    // Resolution scope: the extracted identifiers when a document was
    // supplied, otherwise the identifiers observed in the records.
    let wanted: HashSet<String> = if run_ids.is_empty() {
        step_records.iter().map(|r| r.run_id.clone()).collect()
    } else {
        run_ids.iter().cloned().collect()
    };

    let wanted_ref = &wanted;
    let records_ref = &step_records;
    let auxiliary_step = config.auxiliary_step_name.as_str();

    let (samples, runs) = crossbeam::thread::scope(|scope| {
        let resolver = provenance
            .map(|reader| scope.spawn(move |_| resolve_samples(reader, wanted_ref)));
        let aggregator = scope.spawn(move |_| aggregate_runs(records_ref, auxiliary_step));

        let runs = aggregator
            .join()
            .map_err(|_| ReportError::internal("aggregation thread panicked"))?;
        let samples = match resolver {
            Some(handle) => {
                let resolution = handle
                    .join()
                    .map_err(|_| ReportError::internal("resolution thread panicked"))?;
                match resolution {
                    Ok(index) => index,
                    Err(error) => {
                        warn!(%error, "identity resolution failed, continuing without sample names");
                        SampleIndex::new()
                    }
                }
            }
            None => SampleIndex::new(),
        };
        Ok::<_, ReportError>((samples, runs))
    })
    .map_err(|_| ReportError::internal("pipeline branch scope panicked"))??;

    if runs.is_empty() {
        return Ok(PipelineOutcome::Empty(EmptyReason::NoCanonicalRuns));
    }

    let enriched: Vec<EnrichedRun> = runs
        .into_iter()
        .map(|run| {
            let sample_name = samples
                .get(&run.run_id)
                .and_then(|names| names.iter().next().cloned());
            EnrichedRun { run, sample_name }
        })
        .collect();

    let grouping = group_runs(&enriched, dependency_spec.as_ref());

    info!(
        runs = enriched.len(),
        resolved = samples.len(),
        edges = grouping.edges.len(),
        "report pipeline complete"
    );
    Ok(PipelineOutcome::Complete(ReportBundle {
        run_ids,
        samples,
        runs: enriched,
        grouping,
    }))
}
