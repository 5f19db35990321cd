//! Tender Analyzer Domain Layer
//!
//! This crate contains the domain model for the tender analysis pipeline.
//! It defines the fixed extraction schema, the value objects the pipeline
//! stages exchange, and the trait interfaces behind which infrastructure
//! implementations live.
//!
//! ## Key Concepts
//!
//! - **TenderField**: One named attribute of interest in a tender document,
//!   with keyword hints and an extraction rule used to build prompts
//! - **FieldSchema**: The fixed, ordered set of fields the system extracts
//! - **TenderRecord**: A validated result with exactly one content entry per
//!   schema field - a value object, never mutated in place
//! - **Trait seams**: `LlmBackend`, `DocumentSource`, `RecordSink` define the
//!   boundaries to the language-model backend and the document/sheet
//!   collaborators
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Pure domain logic only (serde is the single external dependency,
//!   for the wire representation of records)
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use field::{FieldSchema, TenderField};
pub use record::{FieldContent, TenderRecord, ITEMS_KEY, PROJECT_NAME_FIELD};
pub use traits::{ChatRequest, DocumentSource, LlmBackend, RecordSink, SourceFile};
