//! Field label table
//!
//! Single source of truth for which record fields are shown and under
//! which label. The deterministic extractor and the AI prompt legend both
//! read this table, keeping the two code paths in behavioral parity.

/// Ordered field-code → display-label table. Table order is the output
/// order for non-mandatory fields.
pub const FIELD_LABELS: &[(&str, &str)] = &[
    ("会社名", "■ 会社名"),
    ("会社URL", "■ 会社URL"),
    ("文字列__1行__1", "■ 電話番号"),
    ("ドロップダウン", "■ 役職"),
    ("氏名", "■ 氏名"),
    ("携帯電話", "■ 携帯電話"),
    ("メールアドレス", "■ メールアドレス"),
    ("郵便番号", "■ 郵便番号"),
    ("日付", "■ 日付"),
    ("住所", "■ 住所"),
    ("イベント", "■ 申込みイベント"),
    ("code1", "■ 流入媒体"),
    ("日程希望1", "■ 日程【第1希望】"),
    ("日程希望2", "■ 日程【第2希望】"),
    ("日程希望3", "■ 日程【第3希望】"),
    ("課題感_0", "■ 課題感"),
    ("備考", "■ 備考"),
    ("業種", "■ 業種"),
    ("会社名カタカナ", "■ 会社名（カタカナ）"),
    ("氏名（カタカナ）", "■ 氏名（カタカナ）"),
    ("code", "■ 弊社記入欄"),
    ("文字列__お問い合わせ", "■ お問い合わせ内容"),
];

/// Fields rendered even when empty, in this fixed output order:
/// inflow source, applied event, internal notes.
pub const MANDATORY_FIELDS: &[&str] = &["code1", "イベント", "code"];

/// Fields whose rendered value keeps digits only
pub const DIGITS_ONLY_FIELDS: &[&str] = &["携帯電話", "郵便番号"];

/// Preferred-schedule fields, first choice first
pub const SCHEDULE_FIELDS: &[&str] = &["日程希望1", "日程希望2", "日程希望3"];

/// Mobile phone field, preferred over the general phone number
pub const MOBILE_PHONE_FIELD: &str = "携帯電話";

/// General phone number field, suppressed when equal to the mobile one
pub const GENERAL_PHONE_FIELD: &str = "文字列__1行__1";

/// Inquiry body, reproduced without any edits
pub const INQUIRY_FIELD: &str = "文字列__お問い合わせ";

/// Display label for a field code
pub fn label_for(code: &str) -> Option<&'static str> {
    FIELD_LABELS
        .iter()
        .find(|(field_code, _)| *field_code == code)
        .map(|(_, label)| *label)
}

pub fn is_mandatory(code: &str) -> bool {
    MANDATORY_FIELDS.contains(&code)
}

pub fn is_digits_only(code: &str) -> bool {
    DIGITS_ONLY_FIELDS.contains(&code)
}

pub fn is_schedule(code: &str) -> bool {
    SCHEDULE_FIELDS.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(label_for("code1"), Some("■ 流入媒体"));
        assert_eq!(label_for("会社名"), Some("■ 会社名"));
        assert_eq!(label_for("unknown"), None);
    }

    #[test]
    fn test_mandatory_fields_have_labels() {
        for &code in MANDATORY_FIELDS {
            assert!(label_for(code).is_some(), "no label for {}", code);
        }
    }

    #[test]
    fn test_special_fields_are_in_table() {
        for &code in DIGITS_ONLY_FIELDS
            .iter()
            .chain(SCHEDULE_FIELDS)
            .chain([MOBILE_PHONE_FIELD, GENERAL_PHONE_FIELD, INQUIRY_FIELD].iter())
        {
            assert!(label_for(code).is_some(), "no label for {}", code);
        }
    }

    #[test]
    fn test_classifiers() {
        assert!(is_mandatory("code1"));
        assert!(!is_mandatory("会社名"));
        assert!(is_digits_only("郵便番号"));
        assert!(!is_digits_only("文字列__1行__1"));
        assert!(is_schedule("日程希望2"));
        assert!(!is_schedule("日付"));
    }
}
