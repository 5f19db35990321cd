//! Result value objects: field content and the tender record
//!
//! A `TenderRecord` is the invariant-bearing output of the validation stage:
//! exactly one entry per schema field, in schema order, headings always
//! populated, content possibly empty. Pipeline stages produce new records
//! rather than mutating existing ones.

use crate::field::FieldSchema;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Wire key under which the field map lives in model responses and
/// serialized records ("items").
pub const ITEMS_KEY: &str = "項目";

/// Name of the field that carries the project name ("案件名").
pub const PROJECT_NAME_FIELD: &str = "案件名";

/// A (heading, content) pair for one schema field.
///
/// The heading always equals the field name; the content is free text and
/// may be empty. Serializes with the wire key names the model is asked to
/// produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContent {
    /// Heading, equal to the field name
    #[serde(rename = "見出し")]
    pub heading: String,

    /// Extracted content, possibly empty
    #[serde(rename = "内容")]
    pub content: String,
}

impl FieldContent {
    /// Create a new field content entry
    pub fn new(heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            content: content.into(),
        }
    }

    /// An entry for a field with no extracted content
    pub fn empty(heading: impl Into<String>) -> Self {
        Self::new(heading, "")
    }
}

/// Validated structured result containing one content entry per schema field.
///
/// Entries keep schema order. Construction goes through the validator or
/// [`TenderRecord::empty`]; both uphold the one-entry-per-field invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderRecord {
    entries: Vec<FieldContent>,
}

impl TenderRecord {
    /// Build a record from ordered entries.
    ///
    /// The caller is responsible for the one-entry-per-schema-field
    /// invariant; the validator and `empty` are the intended call sites.
    pub fn new(entries: Vec<FieldContent>) -> Self {
        Self { entries }
    }

    /// A record with every schema field present and empty content
    pub fn empty(schema: &FieldSchema) -> Self {
        Self {
            entries: schema
                .names()
                .map(FieldContent::empty)
                .collect(),
        }
    }

    /// Ordered entries, one per schema field
    pub fn entries(&self) -> &[FieldContent] {
        &self.entries
    }

    /// Look up the entry for a field name
    pub fn get(&self, name: &str) -> Option<&FieldContent> {
        self.entries.iter().find(|e| e.heading == name)
    }

    /// Content of a field, if the field exists
    pub fn content(&self, name: &str) -> Option<&str> {
        self.get(name).map(|e| e.content.as_str())
    }

    /// The project name (content of 案件名), trimmed; `None` when blank
    pub fn project_name(&self) -> Option<&str> {
        self.content(PROJECT_NAME_FIELD)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Ordered `[heading, content]` rows for the result sink, one per field
    pub fn to_rows(&self) -> Vec<[String; 2]> {
        self.entries
            .iter()
            .map(|e| [e.heading.clone(), e.content.clone()])
            .collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the record has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serializes to the wire shape {"項目": {name: {"見出し": .., "内容": ..}}}
// so consolidation input and sink payloads match what the model is shown.
impl Serialize for TenderRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct Items<'a>(&'a [FieldContent]);

        impl Serialize for Items<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for entry in self.0 {
                    map.serialize_entry(&entry.heading, entry)?;
                }
                map.end()
            }
        }

        let mut outer = serializer.serialize_map(Some(1))?;
        outer.serialize_entry(ITEMS_KEY, &Items(&self.entries))?;
        outer.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_covers_schema() {
        let schema = FieldSchema::standard();
        let record = TenderRecord::empty(&schema);

        assert_eq!(record.len(), schema.len());
        for name in schema.names() {
            let entry = record.get(name).unwrap();
            assert_eq!(entry.heading, name);
            assert_eq!(entry.content, "");
        }
    }

    #[test]
    fn test_project_name_blank_is_none() {
        let schema = FieldSchema::standard();
        let record = TenderRecord::empty(&schema);
        assert_eq!(record.project_name(), None);
    }

    #[test]
    fn test_project_name_is_trimmed() {
        let record = TenderRecord::new(vec![FieldContent::new(
            PROJECT_NAME_FIELD,
            "  公共施設案内システム構築  ",
        )]);
        assert_eq!(record.project_name(), Some("公共施設案内システム構築"));
    }

    #[test]
    fn test_to_rows_preserves_order() {
        let schema = FieldSchema::standard();
        let record = TenderRecord::empty(&schema);
        let rows = record.to_rows();

        assert_eq!(rows.len(), schema.len());
        assert_eq!(rows[0][0], "案件名");
        assert_eq!(rows[4][0], "要件概要");
    }

    #[test]
    fn test_serializes_to_wire_shape() {
        let record = TenderRecord::new(vec![
            FieldContent::new("案件名", "次期ウェブサイト更改業務"),
            FieldContent::empty("発注機関"),
        ]);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value[ITEMS_KEY]["案件名"]["内容"],
            "次期ウェブサイト更改業務"
        );
        assert_eq!(value[ITEMS_KEY]["案件名"]["見出し"], "案件名");
        assert_eq!(value[ITEMS_KEY]["発注機関"]["内容"], "");
    }
}
