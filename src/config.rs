//! # Report Configuration
//!
//! Per-invocation settings with environment-variable overrides. Loaded once
//! and treated as read-only by every component downstream.

use crate::constants;
use crate::error::{ReportError, Result};
use std::path::PathBuf;

/// Tunable settings for one reporting invocation.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Key searched for when extracting run identifiers from nested documents.
    pub run_id_key: String,
    /// Reserved step name aggregated into its run via maximum duration.
    pub auxiliary_step_name: String,
    /// Destination of the flat metrics projection.
    pub metrics_csv_path: PathBuf,
    /// Destination of the run identifier list export.
    pub run_id_list_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            run_id_key: constants::RUN_ID_KEY.to_string(),
            auxiliary_step_name: constants::AUXILIARY_STEP_NAME.to_string(),
            metrics_csv_path: PathBuf::from("workflow_report.csv"),
            run_id_list_path: PathBuf::from("workflow_ids.txt"),
        }
    }
}

impl ReportConfig {
    /// Build a configuration from defaults plus `GANTRY_`-prefixed
    /// environment overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GANTRY_RUN_ID_KEY") {
            config.run_id_key = key;
        }

        if let Ok(name) = std::env::var("GANTRY_AUXILIARY_STEP") {
            config.auxiliary_step_name = name;
        }

        if let Ok(path) = std::env::var("GANTRY_METRICS_CSV") {
            config.metrics_csv_path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("GANTRY_RUN_ID_LIST") {
            config.run_id_list_path = PathBuf::from(path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no invocation can run with.
    pub fn validate(&self) -> Result<()> {
        if self.run_id_key.is_empty() {
            return Err(ReportError::configuration("run_id_key must not be empty"));
        }
        if self.auxiliary_step_name.is_empty() {
            return Err(ReportError::configuration(
                "auxiliary_step_name must not be empty",
            ));
        }
        Ok(())
    }
}
