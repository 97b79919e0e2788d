//! Final message assembly
//!
//! Wraps an organized body in the Chatwork `[info]` block with the
//! event title, record number, and timestamp header.

use chrono::{DateTime, Local};
use kinrelay_core::{EventKind, Record};

use crate::render::render;

/// Timestamp format shown in the header
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Fallback record-number field consulted when `$id` is absent
const RECORD_NUMBER_FIELD: &str = "レコード番号";

/// Marker used when no record identifier can be resolved
const UNKNOWN_RECORD_ID: &str = "N/A";

/// Compose the full notification message around an organized body.
/// The `[info]`/`[/info]` wrapping tags are always balanced.
pub fn compose(kind: EventKind, record: &Record, body: &str, now: DateTime<Local>) -> String {
    let mut message = format!(
        "[info][title]kintone レコード{}通知[/title]",
        kind.display_label()
    );
    message.push_str(&format!("レコード番号: {}\n", record_id(record)));
    message.push_str(&format!("更新時刻: {}\n\n", now.format(TIMESTAMP_FORMAT)));
    message.push_str(body);
    message.push_str("[/info]");
    message
}

fn record_id(record: &Record) -> String {
    record
        .record_id()
        .or_else(|| {
            record
                .field(RECORD_NUMBER_FIELD)
                .map(render)
                .filter(|id| !id.is_empty())
        })
        .unwrap_or_else(|| UNKNOWN_RECORD_ID.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn test_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 9, 21, 15, 34, 0).unwrap()
    }

    #[test]
    fn test_compose_header_and_footer() {
        let record = record(json!({ "$id": { "value": "42" } }));
        let message = compose(EventKind::RecordAdded, &record, "body\n", test_time());

        assert!(message.starts_with("[info][title]kintone レコード新規追加通知[/title]"));
        assert!(message.contains("レコード番号: 42\n"));
        assert!(message.contains("更新時刻: 2025/09/21 15:34:00\n\n"));
        assert!(message.ends_with("body\n[/info]"));
    }

    #[test]
    fn test_compose_update_title() {
        let record = record(json!({}));
        let message = compose(EventKind::RecordUpdated, &record, "", test_time());
        assert!(message.contains("kintone レコード更新通知"));
    }

    #[test]
    fn test_record_id_fallback_to_record_number_field() {
        let record = record(json!({ "レコード番号": { "value": 7 } }));
        let message = compose(EventKind::RecordAdded, &record, "", test_time());
        assert!(message.contains("レコード番号: 7\n"));
    }

    #[test]
    fn test_record_id_unknown_marker() {
        let record = record(json!({}));
        let message = compose(EventKind::RecordAdded, &record, "", test_time());
        assert!(message.contains("レコード番号: N/A\n"));
    }

    #[test]
    fn test_wrapping_tags_balanced() {
        let record = record(json!({ "$id": { "value": "1" } }));
        let message = compose(EventKind::RecordAdded, &record, "line\n", test_time());
        assert_eq!(message.matches("[info]").count(), 1);
        assert_eq!(message.matches("[/info]").count(), 1);
        assert_eq!(message.matches("[title]").count(), 1);
        assert_eq!(message.matches("[/title]").count(), 1);
    }

    #[test]
    fn test_body_embedded_verbatim() {
        let record = record(json!({}));
        let body = "【AIで整理されたデータ】\n■ 会社名: x\n";
        let message = compose(EventKind::RecordAdded, &record, body, test_time());
        assert!(message.contains(body));
    }
}
