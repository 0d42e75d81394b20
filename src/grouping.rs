//! # Dependency Grouping and Ordering
//!
//! Orders enriched runs by observed start time and by the declared run
//! order, and derives the cross-run temporal edges implied by the declared
//! dependency graph.
//!
//! Everything here is a pure function of the runs and the optional
//! [`DependencySpec`]; the spec is loaded once per invocation and read-only.

use crate::models::{DependencySpec, EnrichedRun, TemporalEdge};
use chrono::NaiveDateTime;
use tracing::debug;

/// Both orderings plus the dependency edges for one set of runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunGrouping {
    /// Runs ascending by start time; unparsable timestamps last.
    pub by_start_time: Vec<EnrichedRun>,
    /// Runs in declared order; `None` when no spec was supplied.
    pub by_run_order: Option<Vec<EnrichedRun>>,
    /// Cross-run dependency arrows; empty without a spec.
    pub edges: Vec<TemporalEdge>,
}

/// Group one set of runs under the optional declared spec.
pub fn group_runs(runs: &[EnrichedRun], spec: Option<&DependencySpec>) -> RunGrouping {
    let grouping = RunGrouping {
        by_start_time: order_by_start_time(runs),
        by_run_order: spec.map(|spec| order_by_run_order(runs, spec)),
        edges: spec.map(|spec| dependency_edges(runs, spec)).unwrap_or_default(),
    };
    debug!(
        runs = runs.len(),
        edges = grouping.edges.len(),
        declared = grouping.by_run_order.is_some(),
        "grouped runs"
    );
    grouping
}

/// Stable ascending sort on the lenient start-time parse.
///
/// Runs whose timestamp is missing or unparsable sort as greatest (last)
/// rather than being dropped; ties keep input order.
pub fn order_by_start_time(runs: &[EnrichedRun]) -> Vec<EnrichedRun> {
    let mut sorted = runs.to_vec();
    sorted.sort_by_key(start_key);
    sorted
}

/// Runs keyed by the index of their step name in the declared run order.
///
/// Step names the order does not mention take a sentinel position after
/// every declared index rather than failing; ties fall back to temporal
/// order, then input order.
pub fn order_by_run_order(runs: &[EnrichedRun], spec: &DependencySpec) -> Vec<EnrichedRun> {
    let mut sorted = runs.to_vec();
    sorted.sort_by_key(|run| {
        let position = spec.position(&run.run.step_name).unwrap_or(usize::MAX);
        (position, start_key(run))
    });
    sorted
}

/// One edge per (upstream run, downstream run) pair for every declared
/// dependency: a full cross-product, so several runs sharing a step name
/// multiply edges. The declared graph is never traversed, only enumerated
/// pairwise, so a cyclic spec yields its edges and nothing more.
pub fn dependency_edges(runs: &[EnrichedRun], spec: &DependencySpec) -> Vec<TemporalEdge> {
    let mut edges = Vec::new();
    for (upstream_step, downstream_steps) in &spec.dependencies {
        for downstream_step in downstream_steps {
            for upstream in runs.iter().filter(|run| run.run.step_name == *upstream_step) {
                for downstream in runs.iter().filter(|run| run.run.step_name == *downstream_step) {
                    edges.push(TemporalEdge {
                        from_run_id: upstream.run.run_id.clone(),
                        to_run_id: downstream.run.run_id.clone(),
                        from_end_time: upstream.run.end_time.clone(),
                        to_start_time: downstream.run.start_time.clone(),
                    });
                }
            }
        }
    }
    edges
}

fn start_key(run: &EnrichedRun) -> (u8, NaiveDateTime) {
    match run.run.parsed_start_time() {
        Some(parsed) => (0, parsed),
        None => (1, NaiveDateTime::MIN),
    }
}
