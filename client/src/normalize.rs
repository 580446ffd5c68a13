//! Turns whatever JSON the backend sends for a query into table rows.
//!
//! The backend's success shape is not fixed. Rows are resolved in this order:
//!
//! 1. `results`, when it is an array
//! 2. `data`, when it is an array (used as is) or an object (one row)
//! 3. the value itself, when it is an array
//! 4. the value itself as a single row, when it is an object
//! 5. nothing, for `null` and scalars

use crate::models::ResultRow;
use serde_json::{Map, Value};

const CITATION_PARTS: [(&str, &str); 4] = [
    ("filename", ""),
    ("page", "page "),
    ("paragraph", "paragraph "),
    ("sentence", "sentence "),
];

pub fn normalize(value: &Value) -> Vec<ResultRow> {
    resolve_items(value).iter().map(row_from_value).collect()
}

fn resolve_items(value: &Value) -> Vec<Value> {
    if let Some(results) = value.get("results").and_then(Value::as_array) {
        return results.clone();
    }

    match value.get("data") {
        Some(Value::Array(items)) => return items.clone(),
        Some(item @ Value::Object(_)) => return vec![item.clone()],
        _ => {}
    }

    match value {
        Value::Array(items) => items.clone(),
        Value::Object(_) => vec![value.clone()],
        _ => Vec::new(),
    }
}

/// Non-object items become a row of empty cells.
pub fn row_from_value(item: &Value) -> ResultRow {
    let Some(fields) = item.as_object() else {
        return ResultRow::default();
    };

    ResultRow {
        document_id: field_text(fields, "document_id"),
        theme: field_text(fields, "theme"),
        extracted_answer: field_text(fields, "extracted_answer"),
        citations: fields.get("citations").map(citations_text).unwrap_or_default(),
    }
}

fn field_text(fields: &Map<String, Value>, key: &str) -> String {
    fields.get(key).map(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn citations_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(citation_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        other => citation_text(other),
    }
}

fn citation_text(value: &Value) -> String {
    let Some(fields) = value.as_object() else {
        return scalar_text(value);
    };

    let parts: Vec<String> = CITATION_PARTS
        .iter()
        .filter_map(|(key, label)| match fields.get(*key) {
            None | Some(Value::Null) => None,
            Some(v) => Some(format!("{}{}", label, scalar_text(v))),
        })
        .collect();

    if parts.is_empty() {
        value.to_string()
    } else {
        parts.join(", ")
    }
}
