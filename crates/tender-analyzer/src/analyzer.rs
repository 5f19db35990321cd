//! Pipeline orchestration
//!
//! Drives normalize → chunk → (extract → validate) per chunk → consolidate.
//! Chunks are processed sequentially; the backend owns the rate budget, so
//! ordering is a simplification here, not a correctness requirement - the
//! consolidation input is treated as an unordered collection.

use crate::chunking::Chunker;
use crate::config::AnalyzerConfig;
use crate::consolidate::Consolidator;
use crate::error::AnalyzerError;
use crate::normalize::TextNormalizer;
use crate::prompt::PromptBuilder;
use crate::validator::validate;
use serde_json::Value;
use tender_domain::{FieldSchema, LlmBackend, TenderRecord};
use tracing::{debug, error, info, warn};

/// Analyzes tender-document text into one structured record
pub struct TenderAnalyzer<L: LlmBackend> {
    backend: L,
    schema: FieldSchema,
    prompts: PromptBuilder,
    normalizer: TextNormalizer,
    chunker: Chunker,
}

impl<L> TenderAnalyzer<L>
where
    L: LlmBackend,
    L::Error: std::fmt::Display,
{
    /// Create an analyzer over the standard field schema
    pub fn new(backend: L, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Self::with_schema(backend, config, FieldSchema::standard())
    }

    /// Create an analyzer over a custom field schema
    pub fn with_schema(
        backend: L,
        config: AnalyzerConfig,
        schema: FieldSchema,
    ) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        Ok(Self {
            backend,
            prompts: PromptBuilder::new(&schema, config.summary_char_limit),
            normalizer: TextNormalizer::new(config.max_line_length),
            chunker: Chunker::new(config.max_chunk_size),
            schema,
        })
    }

    /// The schema this analyzer extracts
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Analyze raw extracted text into one consolidated record.
    ///
    /// # Errors
    ///
    /// - `NoText` when the input normalizes to nothing
    /// - `NoExtraction` when no chunk produced a usable record
    ///
    /// Per-chunk backend failures and malformed responses are recovered
    /// locally and never surface here.
    pub fn analyze(&self, text: &str) -> Result<TenderRecord, AnalyzerError> {
        let normalized = self.normalizer.normalize(text);
        if normalized.trim().is_empty() {
            return Err(AnalyzerError::NoText);
        }

        let chunks = self.chunker.chunk(&normalized);
        info!("Split text into {} chunks", chunks.len());

        let mut records = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!("Processing chunk {}/{}", idx + 1, chunks.len());
            match self.extract_chunk(chunk) {
                Some(record) => records.push(record),
                None => warn!("Chunk {}/{} produced no result", idx + 1, chunks.len()),
            }
        }

        if records.is_empty() {
            return Err(AnalyzerError::NoExtraction);
        }
        info!("Extracted {} of {} chunks", records.len(), chunks.len());

        let consolidator = Consolidator::new(&self.backend, &self.prompts, &self.schema);
        consolidator
            .consolidate(&records)
            .ok_or(AnalyzerError::NoExtraction)
    }

    /// Run one extraction call and validate its response. Any failure maps
    /// to `None`; losing one chunk must not abort the run.
    fn extract_chunk(&self, chunk: &str) -> Option<TenderRecord> {
        if chunk.trim().is_empty() {
            warn!("Empty text chunk received");
            return None;
        }

        let request = self.prompts.extraction_request(chunk);

        let raw = match self.backend.complete(&request) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Error analyzing chunk: {}", e);
                return None;
            }
        };
        debug!("Backend response length: {} chars", raw.len());

        let payload: Value = match serde_json::from_str(&raw) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Error parsing chunk response: {}", e);
                return None;
            }
        };

        Some(validate(&payload, &self.schema))
    }
}
