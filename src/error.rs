//! # Report Error Types
//!
//! Structured error handling for the reporting core using thiserror
//! for typed failure outcomes instead of `Box<dyn Error>` patterns.
//!
//! Empty inputs are not errors and never appear here; they surface as
//! [`crate::pipeline::PipelineOutcome::Empty`]. Per-record anomalies
//! (unparsable timestamps or durations, duplicate primary steps) resolve
//! through documented fallbacks inside the components and are likewise
//! never raised as errors.

use thiserror::Error;

/// Failure outcomes surfaced to callers of the reporting core.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Input not found: {source_name}: {message}")]
    InputAbsent {
        source_name: String,
        message: String,
    },

    #[error("Malformed input: {source_name}: {message}")]
    InputMalformed {
        source_name: String,
        message: String,
    },

    #[error("Provenance resolution failed: {message}")]
    Provenance { message: String },

    #[error("Export failed: {destination}: {message}")]
    Export {
        destination: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ReportError {
    /// Create an input-absent error
    pub fn input_absent(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputAbsent {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-input error
    pub fn input_malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputMalformed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a provenance resolution error
    pub fn provenance(message: impl Into<String>) -> Self {
        Self::Provenance {
            message: message.into(),
        }
    }

    /// Create an export error
    pub fn export(destination: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias for reporting operations
pub type Result<T> = std::result::Result<T, ReportError>;
