//! Record data model for kintone webhooks

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix marking kintone system fields ($id, $revision, ...)
pub const SYSTEM_FIELD_PREFIX: char = '$';

/// Field code carrying the record id
pub const RECORD_ID_FIELD: &str = "$id";

/// A single record field as delivered by kintone: a wrapper holding the
/// raw value. The value can be a scalar, an array of entries, a nested
/// object, or absent entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldValue {
    pub fn new(value: Value) -> Self {
        Self { value: Some(value) }
    }

    /// Raw value, with null folded into absence
    pub fn raw(&self) -> Option<&Value> {
        self.value.as_ref().filter(|v| !v.is_null())
    }

    /// True when the field holds nothing renderable: absent, null, or an
    /// empty string
    pub fn is_empty(&self) -> bool {
        match self.raw() {
            None => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }
}

/// One form submission: an ordered map of field code to field value.
///
/// Lookup never panics; a missing field code is an explicit `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, FieldValue>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, field: FieldValue) {
        self.0.insert(code.into(), field);
    }

    pub fn field(&self, code: &str) -> Option<&FieldValue> {
        self.0.get(code)
    }

    /// Raw value of a field, if the field exists and carries one
    pub fn raw_value(&self, code: &str) -> Option<&Value> {
        self.field(code).and_then(FieldValue::raw)
    }

    /// Record id from the `$id` system field, rendered as text
    pub fn record_id(&self) -> Option<String> {
        scalar_text(self.raw_value(RECORD_ID_FIELD)?)
    }

    /// Iterate user-defined fields, skipping `$`-prefixed system metadata
    pub fn user_fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0
            .iter()
            .filter(|(code, _)| !code.starts_with(SYSTEM_FIELD_PREFIX))
            .map(|(code, field)| (code.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Text form of a scalar value (string content as-is, numbers in their
/// canonical form). Arrays and objects yield `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
