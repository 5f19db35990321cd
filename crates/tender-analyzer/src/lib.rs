//! Tender Analyzer Pipeline
//!
//! Converts raw tender-document text into one structured record using an
//! LLM extraction pass per chunk and a consolidation pass over the partial
//! results.
//!
//! # Architecture
//!
//! ```text
//! Text → TextNormalizer → Chunker → (extract → validate)* → Consolidator → TenderRecord
//! ```
//!
//! # Key Features
//!
//! - **Paragraph-aligned chunking**: Bounded-size chunks that never split a
//!   paragraph, keeping field context intact for the model
//! - **Best-effort validation**: Model output of any shape becomes a
//!   well-formed record; drift never propagates as an error
//! - **Partial-failure tolerance**: A failed chunk contributes nothing and
//!   the run continues; consolidation failure falls back to the first
//!   successful chunk
//!
//! # Example Usage
//!
//! ```
//! use tender_analyzer::{AnalyzerConfig, TenderAnalyzer};
//! use tender_llm::MockBackend;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = MockBackend::new(
//!     r#"{"項目": {"案件名": {"見出し": "案件名", "内容": "広報サイト更改"}}}"#,
//! );
//! let analyzer = TenderAnalyzer::new(backend, AnalyzerConfig::default())?;
//!
//! let record = analyzer.analyze("案件名:広報サイト更改")?;
//! assert_eq!(record.content("案件名"), Some("広報サイト更改"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod analyzer;
mod chunking;
mod config;
mod consolidate;
mod error;
mod normalize;
mod prompt;
mod validator;

#[cfg(test)]
mod tests;

pub use analyzer::TenderAnalyzer;
pub use chunking::Chunker;
pub use config::AnalyzerConfig;
pub use consolidate::Consolidator;
pub use error::AnalyzerError;
pub use normalize::TextNormalizer;
pub use prompt::PromptBuilder;
pub use validator::validate;
