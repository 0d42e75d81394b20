//! # Reporting Constants
//!
//! Reserved step names, identifier keys, and tabular column names that
//! define the operational boundaries of the reporting core.
//!
//! The defaults here mirror the upstream pipeline's conventions; the
//! identifier key and auxiliary step name can be overridden per invocation
//! through [`crate::config::ReportConfig`].

/// Reserved auxiliary step name. Records carrying this step name are
/// aggregated into their run's canonical record via maximum duration
/// rather than treated as runs of their own.
pub const AUXILIARY_STEP_NAME: &str = "provisionFileOut";

/// Key searched for when extracting run identifiers from nested documents.
pub const RUN_ID_KEY: &str = "workflow_id";

/// Provenance report columns consumed by the identity resolver.
pub mod provenance_columns {
    pub const ROOT_SAMPLE_NAME: &str = "Root Sample Name";
    pub const WORKFLOW_RUN_SWID: &str = "Workflow Run SWID";
}

/// Column order of the flat metrics projection.
pub const METRICS_CSV_HEADER: [&str; 7] = [
    "step_name",
    "start_time",
    "end_time",
    "duration_seconds",
    "run_id",
    "auxiliary_max_duration",
    "sample_name",
];

/// Header line of the run identifier list export.
pub const RUN_ID_LIST_HEADER: &str = "workflow_run_id";
