//! Field value rendering
//!
//! Converts one raw field value into its display string. Scalar text is
//! reproduced exactly; the inquiry field depends on this.

use kinrelay_core::FieldValue;
use serde_json::Value;

/// Render a field value as display text. Absent and null values render
/// as the empty string.
pub fn render(field: &FieldValue) -> String {
    match field.value.as_ref() {
        None => String::new(),
        Some(value) => render_value(value),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Checkbox / multi-select / user list: render entries in order
        Value::Array(items) => items
            .iter()
            .map(render_entry)
            .collect::<Vec<_>>()
            .join(", "),
        // User or organization reference: prefer name, then value
        Value::Object(map) => {
            if let Some(name) = map.get("name").filter(|v| is_present(v)) {
                scalar_text(name)
            } else if let Some(inner) = map.get("value").filter(|v| is_present(v)) {
                scalar_text(inner)
            } else {
                value.to_string()
            }
        }
        other => other.to_string(),
    }
}

fn render_entry(item: &Value) -> String {
    match item {
        Value::Object(map) => match map.get("value").filter(|v| is_present(v)) {
            Some(inner) => scalar_text(inner),
            None => item.to_string(),
        },
        other => scalar_text(other),
    }
}

/// Text form of a single value. Non-scalar values fall back to their JSON
/// text, a last resort for shapes the form builder never produces.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Strip every non-digit character. Applied to phone and postal-code
/// values after rendering.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
