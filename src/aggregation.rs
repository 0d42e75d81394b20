//! # Run Aggregation
//!
//! Folds raw, interleaved per-step records into one canonical record per
//! workflow run.
//!
//! Records for many runs arrive mixed in arbitrary order. Aggregation
//! partitions them by run id and reduces each partition to a single
//! [`WorkflowRun`], applying the reserved auxiliary step's max-duration
//! rule along the way.

use crate::models::{StepRecord, WorkflowRun};
use std::collections::HashMap;
use tracing::debug;

#[derive(Default)]
struct RunPartition {
    primary: Option<StepRecord>,
    auxiliary_max: f64,
}

/// Fold raw step records into canonical per-run records.
///
/// Within a partition the primary step is the most recently seen record
/// whose step name is not `auxiliary_step` (last-wins: a run id reported
/// with more than one non-auxiliary step is an accepted anomaly, and the
/// later record supplies the canonical fields). `auxiliary_max_duration` is
/// the maximum duration across the partition's auxiliary-named records,
/// where an absent or unparsable duration contributes zero; it defaults to
/// zero when the partition has none. Maximum is idempotent under record
/// duplication.
///
/// Partitions holding only auxiliary records produce no canonical run and
/// are skipped. Output order follows the first appearance of each run id
/// in the input.
pub fn aggregate_runs(records: &[StepRecord], auxiliary_step: &str) -> Vec<WorkflowRun> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut partitions: HashMap<String, RunPartition> = HashMap::new();

    for record in records {
        let partition = partitions.entry(record.run_id.clone()).or_insert_with(|| {
            first_seen.push(record.run_id.clone());
            RunPartition::default()
        });

        if record.step_name == auxiliary_step {
            let duration = record.duration_seconds.unwrap_or(0.0);
            if duration > partition.auxiliary_max {
                partition.auxiliary_max = duration;
            }
        } else {
            partition.primary = Some(record.clone());
        }
    }

    let mut runs = Vec::with_capacity(first_seen.len());
    for run_id in first_seen {
        let Some(partition) = partitions.remove(&run_id) else {
            continue;
        };
        match partition.primary {
            Some(primary) => runs.push(WorkflowRun {
                run_id,
                step_name: primary.step_name,
                start_time: primary.start_time,
                end_time: primary.end_time,
                duration_seconds: primary.duration_seconds,
                auxiliary_max_duration: partition.auxiliary_max,
            }),
            None => {
                debug!(run_id = %run_id, "run reported only auxiliary steps, skipping");
            }
        }
    }
    runs
}
