//! # Data Model
//!
//! Record types flowing through the reporting pipeline: raw step records
//! from the external store, the canonical per-run records folded from them,
//! the declared dependency configuration, and the derived temporal edges.

pub mod dependency_spec;
pub mod step_record;
pub mod temporal_edge;
pub mod workflow_run;

pub use dependency_spec::DependencySpec;
pub use step_record::StepRecord;
pub use temporal_edge::TemporalEdge;
pub use workflow_run::{parse_timestamp, EnrichedRun, WorkflowRun};
