//! Organizer strategies for the message body

use async_trait::async_trait;
use kinrelay_core::Record;

use crate::extract::{extract, RenderedLine};

/// A strategy that turns a record into the notification body text.
///
/// `None` means the strategy cannot produce a body right now (for
/// example an unconfigured or failing AI backend); callers fall through
/// to the next organizer rather than treating it as an error.
#[async_trait]
pub trait Organizer: Send + Sync {
    async fn organize(&self, record: &Record) -> Option<String>;
}

/// Organizer backed by the deterministic field extractor. Always
/// produces a body.
#[derive(Debug, Default)]
pub struct DeterministicOrganizer;

#[async_trait]
impl Organizer for DeterministicOrganizer {
    async fn organize(&self, record: &Record) -> Option<String> {
        let lines: Vec<String> = extract(record).iter().map(RenderedLine::to_text).collect();
        Some(format!("{}\n", lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_deterministic_organizer_always_produces_body() {
        let record: Record = serde_json::from_value(json!({})).unwrap();
        let body = DeterministicOrganizer.organize(&record).await.unwrap();
        assert_eq!(body, "■ 流入媒体:\n■ 申込みイベント:\n■ 弊社記入欄:\n");
    }

    #[tokio::test]
    async fn test_deterministic_organizer_one_line_per_field() {
        let record: Record = serde_json::from_value(json!({
            "code1": { "value": "LP-A" },
            "会社名": { "value": "テスト株式会社" }
        }))
        .unwrap();
        let body = DeterministicOrganizer.organize(&record).await.unwrap();
        let lines: Vec<&str> = body.trim_end().split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "■ 流入媒体: LP-A",
                "■ 申込みイベント:",
                "■ 弊社記入欄:",
                "■ 会社名: テスト株式会社",
            ]
        );
    }
}
