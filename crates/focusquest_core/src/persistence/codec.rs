//! JSON wire format for the persisted quest array.
//!
//! Layout: `[{ "id": string, "title": string, "description"?: string,
//! "status": "Backlog" | "Doing" | "Done" }, ...]`. There is no schema
//! version; records that do not match are dropped on decode.

use crate::model::quest::{Quest, QuestId, QuestStatus};
use serde_json::{Map, Value};

/// Outcome of decoding a stored payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Well-formed records in stored order.
    pub quests: Vec<Quest>,
    /// Array elements that failed validation.
    pub dropped: usize,
    /// `false` when the top-level value was not an array.
    pub was_array: bool,
}

pub fn encode_quests(quests: &[Quest]) -> serde_json::Result<String> {
    serde_json::to_string(quests)
}

/// Parses a stored payload and keeps only well-formed quest records.
///
/// # Errors
/// - Returns the parse error when `raw` is not valid JSON.
pub fn decode_quests(raw: &str) -> serde_json::Result<DecodeReport> {
    let parsed: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = parsed else {
        return Ok(DecodeReport::default());
    };

    let total = items.len();
    let quests: Vec<Quest> = items.iter().filter_map(quest_from_value).collect();
    Ok(DecodeReport {
        dropped: total - quests.len(),
        quests,
        was_array: true,
    })
}

fn quest_from_value(value: &Value) -> Option<Quest> {
    let record = value.as_object()?;
    let status = record
        .get("status")
        .and_then(Value::as_str)
        .and_then(QuestStatus::parse)?;
    let id = record.get("id").and_then(Value::as_str)?;
    let title = record.get("title").and_then(Value::as_str)?;
    let description = optional_text(record, "description")?;

    Some(Quest::with_id(
        QuestId::new(id),
        title,
        description.map(str::to_string),
        status,
    ))
}

/// `Some(None)` when the key is absent, `None` when present but not a string.
fn optional_text<'a>(record: &'a Map<String, Value>, key: &str) -> Option<Option<&'a str>> {
    match record.get(key) {
        None => Some(None),
        Some(Value::String(text)) => Some(Some(text.as_str())),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_quests, encode_quests};
    use crate::model::quest::{Quest, QuestId, QuestStatus};
    use serde_json::json;

    #[test]
    fn encode_omits_missing_description() {
        let quest = Quest::with_id(QuestId::new("1-abc"), "Task", None, QuestStatus::Backlog);
        let encoded = encode_quests(&[quest]).unwrap();
        assert_eq!(encoded, r#"[{"id":"1-abc","title":"Task","status":"Backlog"}]"#);
    }

    #[test]
    fn non_array_payload_decodes_to_empty() {
        let report = decode_quests(r#"{"id":"1","title":"t","status":"Done"}"#).unwrap();
        assert!(report.quests.is_empty());
        assert!(!report.was_array);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(decode_quests("{not json").is_err());
    }

    #[test]
    fn records_are_filtered_individually() {
        let raw = json!([
            {"id": "1", "title": "ok", "status": "Doing", "extra": 5},
            {"id": "2", "title": "bad status", "status": "Archived"},
            {"id": "3", "title": "no status"},
            {"id": 4, "title": "numeric id", "status": "Done"},
            {"id": "5", "status": "Done"},
            {"id": "6", "title": "bad description", "description": 7, "status": "Done"},
            {"id": "7", "title": "null description", "description": null, "status": "Done"},
            "not an object",
            null,
            {"id": "8", "title": "with description", "description": "d", "status": "Done"}
        ])
        .to_string();

        let report = decode_quests(&raw).unwrap();
        let ids: Vec<&str> = report.quests.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "8"]);
        assert_eq!(report.dropped, 8);
        assert_eq!(report.quests[1].description.as_deref(), Some("d"));
    }
}
