//! # Run Identifier Extraction
//!
//! Recursive scan over arbitrarily nested JSON documents for the values of
//! a named identifier key, independent of the document's schema shape.
//!
//! The upstream systems embed run identifiers at unpredictable depths
//! (maps nested under sequences, sequences under maps), so extraction
//! walks the whole tree rather than assuming a schema. Uniqueness is
//! caller-selectable: [`extract_run_ids`] keeps duplicates for
//! presence-counting call sites, [`unique_run_ids`] de-duplicates in
//! first-occurrence order.

use serde_json::Value;
use std::collections::HashSet;

/// Collect every value stored under `key` at any depth, in document order.
///
/// A matched value is appended as-is and not re-scanned, so an identifier
/// key nested inside another identifier's value is not reported separately.
/// Returns an empty vector when the key is absent anywhere; never fails.
/// Runs in time linear in the document's node count.
pub fn collect_key_values(document: &Value, key: &str) -> Vec<Value> {
    let mut found = Vec::new();
    scan(document, key, &mut found);
    found
}

fn scan(node: &Value, key: &str, found: &mut Vec<Value>) {
    match node {
        Value::Object(entries) => {
            for (name, value) in entries {
                if name == key {
                    found.push(value.clone());
                } else {
                    scan(value, key, found);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                scan(item, key, found);
            }
        }
        _ => {}
    }
}

/// Scalar identifier values rendered to strings, in document order,
/// duplicates retained. Non-scalar values under the key are skipped.
pub fn extract_run_ids(document: &Value, key: &str) -> Vec<String> {
    collect_key_values(document, key)
        .into_iter()
        .filter_map(|value| match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .collect()
}

/// First-occurrence-ordered unique identifiers.
pub fn unique_run_ids(document: &Value, key: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_run_ids(document, key)
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
