//! Prompt construction for the AI organizer
//!
//! The legend and output format are generated from the same label table
//! the deterministic extractor uses, so both code paths enumerate the
//! same fields under the same labels.

use kinrelay_core::Record;
use kinrelay_format::labels::{is_digits_only, FIELD_LABELS, INQUIRY_FIELD};

/// System instructions sent with every organize request
pub const SYSTEM_PROMPT: &str = "あなたはkintoneのデータを整理する専門のアシスタントです。

★★★ 絶対条件 ★★★
1. code1フィールドの値は必ず「■ 流入媒体:」として出力してください
2. 申込みイベントと弊社記入欄も必ず表示してください

指定された項目のみを抽出し、値が存在する項目のみを返してください。
値が空文字(\"\")、null、undefined、または存在しない項目は一切出力しないでください。
問い合わせ内容は1文字も編集せず、元の内容をそのまま記載してください。
携帯電話と郵便番号は数字のみで記載してください。
勝手な追記、説明、コメントは一切追加しないでください。
指定された出力形式以外の内容は絶対に出力しないでください。";

/// Build the user prompt embedding the serialized record and the shared
/// field legend
pub fn build_prompt(record: &Record) -> String {
    let record_json = serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string());

    let mut legend = String::new();
    let mut format_lines = String::new();
    for &(code, label) in FIELD_LABELS {
        let item = label.trim_start_matches("■ ");
        let note = if is_digits_only(code) {
            "（数字のみで出力）"
        } else if code == INQUIRY_FIELD {
            "（1文字も編集せずそのまま記載）"
        } else {
            ""
        };
        legend.push_str(&format!("- \"{}\" → {}{}\n", code, item, note));

        let placeholder = if is_digits_only(code) {
            "[数字のみ]"
        } else if code == INQUIRY_FIELD {
            "[元の内容をそのまま記載]"
        } else {
            "[値]"
        };
        format_lines.push_str(&format!("{}: {}\n", label, placeholder));
    }

    format!(
        "以下のkintoneレコードデータから、記載がある項目のみを抽出してください。

【kintoneフィールドコードと対応する項目】
{legend}
【kintoneレコードデータ】
{record_json}

【出力形式】
記載がある項目のみを以下の形式で出力してください：

{format_lines}
【重要な出力条件】
1. 値が空文字(\"\")、null、undefined、空配列[]、または存在しない項目は絶対に出力しないでください（ただし申込みイベント、流入媒体、弊社記入欄は例外として必ず出力）
2. 携帯電話と電話番号が同じ値の場合は、携帯電話のみを出力してください
3. 日程【第1希望】、【第2希望】、【第3希望】が同じ値の場合は、第1希望のみを出力してください
4. 申込みイベント、流入媒体、弊社記入欄は値の有無に関わらず必ず出力してください（値がない場合は「■ 流入媒体:」のように空欄で出力）
5. お問い合わせ内容は1文字も編集せず、元の内容をそのまま記載してください
6. kintoneのレコードデータそのものやフィールドの構造情報は絶対に出力しないでください
7. 出力形式以外の内容（見出し、説明、コメント）は一切出力しないでください

例：携帯電話が\"08044234983\"で電話番号も\"08044234983\"の場合、携帯電話のみ出力
例：日程が全て\"2025-09-21T06:34:00Z\"の場合、第1希望のみ出力
例：お問い合わせ内容が空の場合、\"■ お問い合わせ内容:\" の行自体を出力しない
例：流入媒体が空でも「■ 流入媒体:」の行は必ず出力する"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_prompt_embeds_record_json() {
        let prompt = build_prompt(&record(json!({
            "会社名": { "value": "テスト株式会社" }
        })));
        assert!(prompt.contains("テスト株式会社"));
        assert!(prompt.contains("【kintoneレコードデータ】"));
    }

    #[test]
    fn test_prompt_legend_covers_every_labeled_field() {
        let prompt = build_prompt(&record(json!({})));
        for (code, label) in FIELD_LABELS {
            assert!(prompt.contains(&format!("\"{}\"", code)), "missing {}", code);
            assert!(prompt.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_prompt_marks_digits_only_fields() {
        let prompt = build_prompt(&record(json!({})));
        assert!(prompt.contains("- \"携帯電話\" → 携帯電話（数字のみで出力）"));
        assert!(prompt.contains("- \"郵便番号\" → 郵便番号（数字のみで出力）"));
    }

    #[test]
    fn test_prompt_marks_inquiry_verbatim() {
        let prompt = build_prompt(&record(json!({})));
        assert!(prompt.contains("- \"文字列__お問い合わせ\" → お問い合わせ内容（1文字も編集せずそのまま記載）"));
    }

    #[test]
    fn test_prompt_states_dedup_and_mandatory_rules() {
        let prompt = build_prompt(&record(json!({})));
        assert!(prompt.contains("携帯電話のみを出力"));
        assert!(prompt.contains("第1希望のみを出力"));
        assert!(prompt.contains("申込みイベント、流入媒体、弊社記入欄は値の有無に関わらず必ず出力"));
    }

    #[test]
    fn test_system_prompt_forbids_extra_output() {
        assert!(SYSTEM_PROMPT.contains("指定された出力形式以外の内容は絶対に出力しないでください"));
        assert!(SYSTEM_PROMPT.contains("1文字も編集せず"));
    }
}
