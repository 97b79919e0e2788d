//! Deterministic field extraction
//!
//! Produces the ordered line list for a record: the three mandatory
//! fields first (always, even when empty), then the remaining labeled
//! fields in table order with empty values skipped and duplicate
//! phone/schedule lines suppressed.

use std::collections::HashSet;

use kinrelay_core::Record;
use serde_json::Value;

use crate::labels::{
    is_digits_only, is_schedule, label_for, FIELD_LABELS, GENERAL_PHONE_FIELD, MANDATORY_FIELDS,
    MOBILE_PHONE_FIELD, SCHEDULE_FIELDS,
};
use crate::render::{digits_only, render};

/// One output line: a label and its rendered value. The label is never
/// empty; the value is empty only for mandatory fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub label: String,
    pub value: String,
}

impl RenderedLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Serialize as `label: value`, or a bare `label:` when empty
    pub fn to_text(&self) -> String {
        if self.value.is_empty() {
            format!("{}:", self.label)
        } else {
            format!("{}: {}", self.label, self.value)
        }
    }
}

/// Extract the ordered notification lines from a record
pub fn extract(record: &Record) -> Vec<RenderedLine> {
    let mut lines = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();

    // Mandatory fields come first and are exempt from every suppression
    // rule; a missing field still yields its labeled line.
    for &code in MANDATORY_FIELDS {
        let label = label_for(code).unwrap_or(code);
        let value = record.field(code).map(render).unwrap_or_default();
        lines.push(RenderedLine::new(label, value));
        processed.insert(code);
    }

    for &(code, label) in FIELD_LABELS {
        if processed.contains(code) {
            continue;
        }
        let Some(field) = record.field(code) else {
            continue;
        };
        let mut value = render(field);
        if value.is_empty() {
            continue;
        }

        if is_digits_only(code) {
            value = digits_only(&value);
        }

        // Second and third schedule choices collapse into the first when
        // all three raw values match.
        if is_schedule(code) && code != SCHEDULE_FIELDS[0] && schedule_triple_equal(record) {
            continue;
        }

        // Mobile takes precedence over an identical general phone number.
        if code == GENERAL_PHONE_FIELD && phones_equal(record) {
            continue;
        }

        if value.is_empty() {
            continue;
        }
        lines.push(RenderedLine::new(label, value));
    }

    lines
}

fn schedule_triple_equal(record: &Record) -> bool {
    let first = record.raw_value(SCHEDULE_FIELDS[0]);
    let second = record.raw_value(SCHEDULE_FIELDS[1]);
    let third = record.raw_value(SCHEDULE_FIELDS[2]);
    first == second && second == third
}

fn phones_equal(record: &Record) -> bool {
    match (
        record.raw_value(MOBILE_PHONE_FIELD),
        record.raw_value(GENERAL_PHONE_FIELD),
    ) {
        (Some(mobile), Some(general)) => {
            is_non_empty(mobile) && is_non_empty(general) && mobile == general
        }
        _ => false,
    }
}

fn is_non_empty(value: &Value) -> bool {
    value.as_str().map_or(true, |s| !s.is_empty())
}
