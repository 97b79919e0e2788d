//! Inbound webhook payload types

use serde::Deserialize;
use serde_json::Value;

use crate::record::Record;

/// Supported webhook event kinds. Any other kind is accepted by the
/// endpoint but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    RecordAdded,
    RecordUpdated,
}

impl EventKind {
    /// Parse the webhook `type` string
    pub fn from_type(event_type: &str) -> Option<Self> {
        match event_type {
            "ADD_RECORD" => Some(EventKind::RecordAdded),
            "UPDATE_RECORD" => Some(EventKind::RecordUpdated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::RecordAdded => "ADD_RECORD",
            EventKind::RecordUpdated => "UPDATE_RECORD",
        }
    }

    /// Japanese label used in the notification title
    pub fn display_label(&self) -> &'static str {
        match self {
            EventKind::RecordAdded => "新規追加",
            EventKind::RecordUpdated => "更新",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Webhook payload as posted by kintone.
///
/// The app identifier arrives either flat (`appId`) or nested under an
/// `app` object, and as a JSON string or number depending on the source.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "type")]
    pub event_type: String,

    pub record: Option<Record>,

    #[serde(rename = "appId")]
    app_id: Option<Value>,

    app: Option<AppRef>,
}

#[derive(Debug, Clone, Deserialize)]
struct AppRef {
    #[serde(rename = "appId", alias = "id")]
    app_id: Option<Value>,
}

impl WebhookPayload {
    /// Event kind, when the `type` is one we process
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_type(&self.event_type)
    }

    /// App identifier, accepting both the flat and nested shapes
    pub fn app_id(&self) -> Option<String> {
        self.app_id
            .as_ref()
            .or_else(|| self.app.as_ref().and_then(|app| app.app_id.as_ref()))
            .and_then(id_text)
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
