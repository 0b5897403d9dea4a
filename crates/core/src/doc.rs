//! Lenient field extraction from raw documents.
//!
//! The store is schema-flexible, so the read path must tolerate documents
//! with missing or oddly-typed fields. These helpers default instead of
//! failing: strings to `""`, numbers to `0`/`0.0`, booleans to `false`,
//! string lists to empty.

use serde_json::Value;

/// Required string field; missing or non-string values become `""`.
pub fn str_field(data: &Value, field: &str) -> String {
    data.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Optional string field; missing or non-string values become `None`.
pub fn opt_str_field(data: &Value, field: &str) -> Option<String> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// String-list field; non-string elements are dropped.
pub fn str_list_field(data: &Value, field: &str) -> Vec<String> {
    data.get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Integer field. JSON floats are accepted and truncated, since documents
/// written by other clients may store counts as floating point.
pub fn i64_field(data: &Value, field: &str) -> i64 {
    let value = data.get(field);
    value
        .and_then(Value::as_i64)
        .or_else(|| value.and_then(Value::as_f64).map(|f| f as i64))
        .unwrap_or(0)
}

/// Float field; integers widen, anything else becomes `0.0`.
pub fn f64_field(data: &Value, field: &str) -> f64 {
    data.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Boolean field; missing or non-boolean values become `false`.
pub fn bool_field(data: &Value, field: &str) -> bool {
    data.get(field).and_then(Value::as_bool).unwrap_or(false)
}
