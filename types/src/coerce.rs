//! Numeric coercion of untrusted instruction fields.
//!
//! Price and quantity fields arrive from presentation collaborators as raw
//! JSON values. Nothing downstream ever sees the raw value: every write path
//! funnels through [`to_finite_f64`], and a failed parse takes the documented
//! per-field fallback instead of storing garbage or erroring out.

use serde_json::Value;

/// Parse an untrusted JSON value as a finite number.
///
/// Accepts JSON numbers and numeric strings (trimmed). Everything else -
/// null, booleans, arrays, objects, non-numeric or empty strings, and
/// non-finite results - yields `None`.
#[must_use]
pub fn to_finite_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}
