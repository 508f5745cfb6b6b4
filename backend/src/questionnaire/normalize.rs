//! Turns a stored founder-input record into a `FounderProductDescription`.
//!
//! Records come back from the store as JSON objects whose list columns may be
//! real arrays or JSON-encoded strings, depending on how they were written.
//! Every field has its own fallback so a malformed record still yields a
//! usable description:
//!
//! - missing or blank text → `None` (the compiler substitutes default copy)
//! - a non-list where a list is expected → empty list
//! - an undecodable JSON string where a list is expected → empty list
//! - blank problem/segment entries → dropped
//! - non-numeric or non-positive prices → dropped

use serde_json::Value;

/// Used when neither a display name nor an email is present.
pub const DEFAULT_FOUNDER: &str = "the founder";

/// Compiler input. Built once per compile and never mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FounderProductDescription {
    pub founder_name_or_email: String,
    pub problem_domain: Option<String>,
    pub problems: Vec<String>,
    pub value_proposition: Option<String>,
    pub is_paid_service: bool,
    pub price_points: Vec<f64>,
    pub target_segments: Vec<String>,
    pub target_actions: Vec<String>,
}

impl FounderProductDescription {
    /// Builds a description from a `founder_inputs` record. Never fails.
    pub fn from_record(record: &Value) -> Self {
        let founder_name_or_email = text_field(record, "founder_display_name")
            .or_else(|| text_field(record, "founder_email"))
            .unwrap_or_else(|| DEFAULT_FOUNDER.to_string());

        Self {
            founder_name_or_email,
            problem_domain: text_field(record, "problem_domain"),
            problems: non_blank_strings(list_field(record, "problems")),
            value_proposition: text_field(record, "value_prop"),
            is_paid_service: flag_field(record, "is_paid_service"),
            price_points: positive_prices(list_field(record, "price_points")),
            target_segments: non_blank_strings(list_field(record, "target_segments")),
            target_actions: list_field(record, "target_actions")
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        }
    }
}

/// Trimmed, non-blank string value of `name`.
fn text_field(record: &Value, name: &str) -> Option<String> {
    record
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Elements of a list field. Accepts an array or a JSON-encoded array string.
fn list_field(record: &Value, name: &str) -> Vec<Value> {
    match record.get(name) {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(raw)) => decode_list(raw),
        _ => Vec::new(),
    }
}

fn decode_list(raw: &str) -> Vec<Value> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn flag_field(record: &Value, name: &str) -> bool {
    match record.get(name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    }
}

fn non_blank_strings(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            _ => None,
        })
        .collect()
}

/// Keeps entries that coerce to a finite number greater than zero.
fn positive_prices(items: Vec<Value>) -> Vec<f64> {
    items
        .iter()
        .filter_map(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|p| p.is_finite() && *p > 0.0)
        .collect()
}
