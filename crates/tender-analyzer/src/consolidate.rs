//! Consolidation of per-chunk records into one final record
//!
//! A second model pass merges the partial results. The failure policy is
//! explicit: a failed consolidation call degrades to the first chunk's
//! record, while an empty input yields no result at all so callers can
//! treat "no chunks succeeded" as a terminal failure.

use crate::prompt::PromptBuilder;
use crate::validator::validate;
use serde_json::Value;
use tender_domain::{FieldSchema, LlmBackend, TenderRecord};
use tracing::{error, warn};

/// Merges per-chunk records through a single consolidation call
pub struct Consolidator<'a, L: LlmBackend> {
    backend: &'a L,
    prompts: &'a PromptBuilder,
    schema: &'a FieldSchema,
}

impl<'a, L> Consolidator<'a, L>
where
    L: LlmBackend,
    L::Error: std::fmt::Display,
{
    /// Create a consolidator over the given backend and prompt builder
    pub fn new(backend: &'a L, prompts: &'a PromptBuilder, schema: &'a FieldSchema) -> Self {
        Self {
            backend,
            prompts,
            schema,
        }
    }

    /// Merge the records into one. Returns `None` for empty input; a failed
    /// call falls back to the first record.
    pub fn consolidate(&self, records: &[TenderRecord]) -> Option<TenderRecord> {
        if records.is_empty() {
            warn!("No results to consolidate");
            return None;
        }

        match self.merge(records) {
            Ok(merged) => Some(merged),
            Err(e) => {
                error!("Error consolidating results: {}", e);
                Some(records[0].clone())
            }
        }
    }

    fn merge(&self, records: &[TenderRecord]) -> Result<TenderRecord, String> {
        let serialized = serde_json::to_string_pretty(records)
            .map_err(|e| format!("Failed to serialize records: {}", e))?;

        let request = self.prompts.consolidation_request(&serialized);

        let raw = self
            .backend
            .complete(&request)
            .map_err(|e| format!("Backend error: {}", e))?;

        let payload: Value = serde_json::from_str(&raw)
            .map_err(|e| format!("JSON parse error: {}", e))?;

        Ok(validate(&payload, self.schema))
    }
}
