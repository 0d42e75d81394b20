//! Raw per-step metric records as reported by the external store.

use serde::{Deserialize, Deserializer, Serialize};

/// One reported execution step for a workflow run.
///
/// The upstream store is lenient about field quality: timestamps are
/// carried as raw text and parsed only where ordering needs them, and a
/// duration the store failed to report as a number deserializes to `None`
/// rather than rejecting the record. Serde aliases accept the store's
/// legacy field names (`workflow_name`, `wallclock_seconds`,
/// `workflow_run_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    #[serde(alias = "workflow_run_id")]
    pub run_id: String,
    #[serde(alias = "workflow_name")]
    pub step_name: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(
        alias = "wallclock_seconds",
        default,
        deserialize_with = "lenient_duration"
    )]
    pub duration_seconds: Option<f64>,
}

/// Accepts a JSON number, a numeric string, or anything else (as absent).
/// A malformed duration must not reject the record; the other fields are
/// still extracted.
fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_spec_field_names() {
        let record: StepRecord = serde_json::from_str(
            r#"{
                "run_id": "A1",
                "step_name": "align",
                "start_time": "2024-01-01T00:00:00",
                "end_time": "2024-01-01T01:00:00",
                "duration_seconds": 3600
            }"#,
        )
        .unwrap();
        assert_eq!(record.run_id, "A1");
        assert_eq!(record.step_name, "align");
        assert_eq!(record.duration_seconds, Some(3600.0));
    }

    #[test]
    fn test_deserialize_legacy_field_names() {
        let record: StepRecord = serde_json::from_str(
            r#"{
                "workflow_run_id": "12345",
                "workflow_name": "provisionFileOut",
                "wallclock_seconds": 80
            }"#,
        )
        .unwrap();
        assert_eq!(record.run_id, "12345");
        assert_eq!(record.step_name, "provisionFileOut");
        assert_eq!(record.duration_seconds, Some(80.0));
        assert_eq!(record.start_time, None);
    }

    #[test]
    fn test_malformed_duration_does_not_reject_record() {
        let record: StepRecord = serde_json::from_str(
            r#"{"run_id": "A1", "step_name": "align", "duration_seconds": "not a number"}"#,
        )
        .unwrap();
        assert_eq!(record.duration_seconds, None);

        let record: StepRecord = serde_json::from_str(
            r#"{"run_id": "A1", "step_name": "align", "duration_seconds": null}"#,
        )
        .unwrap();
        assert_eq!(record.duration_seconds, None);
    }

    #[test]
    fn test_numeric_string_duration_parses() {
        let record: StepRecord = serde_json::from_str(
            r#"{"run_id": "A1", "step_name": "align", "duration_seconds": " 42.5 "}"#,
        )
        .unwrap();
        assert_eq!(record.duration_seconds, Some(42.5));
    }
}
