//! Cross-run dependency arrows derived from the declared graph.

use serde::{Deserialize, Serialize};

/// Directed relation meaning the upstream run's completion logically
/// precedes the downstream run's start. Derived per invocation and handed
/// to the rendering surface; never stored.
///
/// Timestamps are carried as the runs' raw text; parsing them is the
/// renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalEdge {
    pub from_run_id: String,
    pub to_run_id: String,
    pub from_end_time: Option<String>,
    pub to_start_time: Option<String>,
}
