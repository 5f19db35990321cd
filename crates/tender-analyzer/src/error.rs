//! Error types for the analysis pipeline
//!
//! Per-chunk extraction failures and malformed model output are recovered
//! locally and never appear here; the pipeline only fails when there is
//! nothing to analyze or nothing was extracted.

use thiserror::Error;

/// Errors that can occur during tender analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Input normalized to empty or whitespace-only text
    #[error("No text to analyze")]
    NoText,

    /// No chunk produced a usable record
    #[error("No information could be extracted from any chunk")]
    NoExtraction,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
