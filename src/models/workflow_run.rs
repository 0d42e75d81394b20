//! Canonical per-run records and their identity-enriched projection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One logical workflow run, folded from its raw step records.
///
/// Exactly one exists per run id that reported at least one non-auxiliary
/// step. The canonical fields come from the run's primary step record; the
/// auxiliary maximum is derived across the run's auxiliary-named records.
/// Immutable once produced, apart from the identity enrichment join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub run_id: String,
    pub step_name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration_seconds: Option<f64>,
    pub auxiliary_max_duration: f64,
}

impl WorkflowRun {
    /// Lenient start-time parse used by the ordering code. `None` means
    /// missing or unparsable; ordering treats that as greatest.
    pub fn parsed_start_time(&self) -> Option<NaiveDateTime> {
        self.start_time.as_deref().and_then(parse_timestamp)
    }

    /// Lenient end-time parse.
    pub fn parsed_end_time(&self) -> Option<NaiveDateTime> {
        self.end_time.as_deref().and_then(parse_timestamp)
    }
}

/// Canonical run plus the externally resolved sample identity.
///
/// `sample_name` absence is valid; a run without a resolved sample is
/// carried through every ordering and export unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRun {
    #[serde(flatten)]
    pub run: WorkflowRun,
    pub sample_name: Option<String>,
}

impl EnrichedRun {
    /// Wrap a canonical run with no resolved identity.
    pub fn without_sample(run: WorkflowRun) -> Self {
        Self {
            run,
            sample_name: None,
        }
    }
}

/// Parse the timestamp shapes the upstream store has been observed to emit:
/// RFC 3339 with an offset, or naive `T`/space-separated datetimes with an
/// optional fractional second. Unparsable text yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}
