//! JSON reporter — machine-readable output for CI pipelines.

use serde_json::json;

use super::Reporter;
use crate::gates::GateResult;

/// JSON reporter.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, result: &GateResult) -> Result<String, String> {
        serde_json::to_string_pretty(&json!({
            "verdict": result.verdict,
            "passed": result.passed(),
            "log": result.log,
        }))
        .map_err(|e| e.to_string())
    }
}
