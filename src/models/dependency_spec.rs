//! Declared workflow run order and dependency graph configuration.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Static declaration of the canonical run order and the step dependency
/// graph. Loaded once per invocation and treated as immutable.
///
/// `dependencies` maps a step name to the step names that depend on it. A
/// cyclic graph is permitted input: edges are derived pairwise and never
/// traversed, so a cycle yields edges and nothing more.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencySpec {
    #[serde(rename = "workflow_run_order", alias = "run_order")]
    pub run_order: Vec<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,
}

impl DependencySpec {
    /// Parse a dependency specification from a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| ReportError::input_malformed("dependency specification", e.to_string()))
    }

    /// Load a dependency specification from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ReportError::input_absent(path.display().to_string(), e.to_string())
            }
            _ => ReportError::input_malformed(path.display().to_string(), e.to_string()),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Position of a step name in the declared run order; `None` for steps
    /// the order does not mention.
    pub fn position(&self, step_name: &str) -> Option<usize> {
        self.run_order.iter().position(|name| name == step_name)
    }
}
