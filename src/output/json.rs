//! JSON output renderer.
//!
//! Outputs `{"left", "right", "operation", "ok", "result", "error", "display"}`.
//! Finite results are JSON numbers; `inf`, `-inf` and `NaN` have no JSON
//! number form and are emitted as those strings.

use crate::calculator::format_outcome;
use crate::models::Evaluation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer {
    pub precision: Option<usize>,
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let (result, error) = match evaluation.outcome {
            Ok(value) if value.is_finite() => (serde_json::json!(value), serde_json::Value::Null),
            Ok(value) => (serde_json::json!(value.to_string()), serde_json::Value::Null),
            Err(err) => (
                serde_json::Value::Null,
                serde_json::json!({
                    "kind": err.kind(),
                    "message": err.to_string(),
                }),
            ),
        };

        let output = serde_json::json!({
            "left": evaluation.left,
            "right": evaluation.right,
            "operation": evaluation.operation,
            "ok": evaluation.is_ok(),
            "result": result,
            "error": error,
            "display": format_outcome(&evaluation.outcome, self.precision),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
