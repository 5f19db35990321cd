//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error (missing or invalid environment values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable text in any source document
    #[error("No text found in the source documents")]
    NoInput,

    /// Analysis failure from the pipeline
    #[error("Analysis failed: {0}")]
    Analysis(#[from] tender_analyzer::AnalyzerError),

    /// Backend setup error
    #[error("Backend error: {0}")]
    Backend(#[from] tender_llm::LlmError),

    /// Result could not be persisted; the analysis itself succeeded
    #[error("Failed to write result: {0}")]
    Sink(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
