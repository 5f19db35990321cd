//! Best-effort validation of raw model output
//!
//! The payload here is model output, so nothing about its shape can be
//! trusted. Validation never fails: whatever arrives is coerced into a
//! record with exactly the schema's fields, in schema order, each populated
//! with a trimmed string (possibly empty). This is the pipeline's only
//! defense against model output drift.

use serde_json::{Map, Value};
use tender_domain::{FieldContent, FieldSchema, TenderRecord, ITEMS_KEY};
use tracing::warn;

/// Shape of one field's payload inside the items container
enum FieldPayload<'a> {
    /// A bare string used directly as content
    Text(&'a str),
    /// An object expected to carry a content key
    Object(&'a Map<String, Value>),
    /// Some other non-null value, stringified
    Other(&'a Value),
    /// Missing or null
    Absent,
}

impl<'a> FieldPayload<'a> {
    fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldPayload::Absent,
            Some(Value::String(s)) => FieldPayload::Text(s),
            Some(Value::Object(map)) => FieldPayload::Object(map),
            Some(other) => FieldPayload::Other(other),
        }
    }

    /// Resolve to content text. Objects accept both content key spellings,
    /// the Japanese wire key first.
    fn into_content(self) -> String {
        match self {
            FieldPayload::Text(s) => s.trim().to_string(),
            FieldPayload::Object(map) => {
                let value = map.get("内容").or_else(|| map.get("content"));
                match value {
                    Some(v) => value_to_string(v),
                    None => String::new(),
                }
            }
            FieldPayload::Other(v) => value_to_string(v),
            FieldPayload::Absent => String::new(),
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Validate and normalize a raw payload into a well-formed record.
///
/// Idempotent: validating a serialized valid record returns an equal record.
pub fn validate(payload: &Value, schema: &FieldSchema) -> TenderRecord {
    let items = match payload.get(ITEMS_KEY).and_then(Value::as_object) {
        Some(items) => items,
        None => {
            warn!("Response has no usable '{}' container", ITEMS_KEY);
            return TenderRecord::empty(schema);
        }
    };

    let entries = schema
        .names()
        .map(|name| {
            let content = FieldPayload::classify(items.get(name)).into_content();
            FieldContent::new(name, content)
        })
        .collect();

    TenderRecord::new(entries)
}
