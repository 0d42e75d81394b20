#![allow(clippy::doc_markdown)] // Allow technical terms like TSV, SWID in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Gantry Core
//!
//! Run aggregation and dependency-ordering engine for workflow run-time
//! reporting.
//!
//! ## Overview
//!
//! The crate ingests raw execution records for a pipeline of
//! interdependent computational workflows, reconciles them into one
//! canonical record per workflow run, enriches each run with an
//! externally-resolved sample identity, and produces temporally- and
//! dependency-ordered views suitable for visualization.
//!
//! ## Architecture
//!
//! ```text
//!   identifier document          external metrics store
//!          |                              |
//!   extraction (run ids)                  |
//!      |           |                      |
//!      |     provenance (samples)   aggregation (canonical runs)
//!      |           \                      /
//!      |            join on run id (enrich)
//!      |                     |
//!      |              grouping (orderings + edges)
//!      |                     |
//!      +--------------> export surface
//! ```
//!
//! The resolver and aggregator branches are independent and run
//! concurrently; their deterministic join on run id is the pipeline's only
//! synchronization barrier.
//!
//! ## Module Organization
//!
//! - [`models`] - Record types flowing through the pipeline
//! - [`extraction`] - Run identifier scan over nested documents
//! - [`provenance`] - Streaming sample identity resolution
//! - [`aggregation`] - Canonical per-run record folding
//! - [`grouping`] - Temporal/declared orderings and dependency edges
//! - [`pipeline`] - One-shot batch orchestration of the above
//! - [`export`] - Incremental flat projections
//! - [`config`] - Invocation settings
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use gantry_core::aggregation::aggregate_runs;
//! use gantry_core::models::StepRecord;
//!
//! let records = vec![
//!     StepRecord {
//!         run_id: "A1".to_string(),
//!         step_name: "align".to_string(),
//!         start_time: Some("2024-01-01T00:00:00".to_string()),
//!         end_time: Some("2024-01-01T01:00:00".to_string()),
//!         duration_seconds: Some(3600.0),
//!     },
//!     StepRecord {
//!         run_id: "A1".to_string(),
//!         step_name: "provisionFileOut".to_string(),
//!         start_time: None,
//!         end_time: None,
//!         duration_seconds: Some(80.0),
//!     },
//! ];
//!
//! let runs = aggregate_runs(&records, "provisionFileOut");
//! assert_eq!(runs.len(), 1);
//! assert_eq!(runs[0].auxiliary_max_duration, 80.0);
//! ```

pub mod aggregation;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod extraction;
pub mod grouping;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod provenance;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use grouping::RunGrouping;
pub use models::{DependencySpec, EnrichedRun, StepRecord, TemporalEdge, WorkflowRun};
pub use pipeline::{EmptyReason, PipelineOutcome, ReportBundle, ReportInputs};
pub use provenance::SampleIndex;
