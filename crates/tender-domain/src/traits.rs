//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline core and
//! infrastructure. Infrastructure implementations live in other crates.

/// A system/user prompt pair for one model call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// System prompt (persona, rules, expected response shape)
    pub system: String,

    /// User prompt (the text or serialized records to work on)
    pub user: String,
}

impl ChatRequest {
    /// Create a request from system and user prompt text
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Trait for language-model backend operations
///
/// Implemented by the infrastructure layer (tender-llm)
pub trait LlmBackend {
    /// Error type for backend operations
    type Error;

    /// Issue one completion call and return the raw textual payload
    fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error>;
}

/// A file listed by a document source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Provider-specific file identifier
    pub id: String,

    /// Human-readable file name
    pub name: String,

    /// MIME type, used to decide how to extract text
    pub mime_type: String,
}

/// Trait for the source-document provider (the cloud drive collaborator)
///
/// The core only consumes flat text per file; format-specific extraction is
/// the provider's concern.
pub trait DocumentSource {
    /// Error type for source operations
    type Error;

    /// List the files available in the configured container
    fn list_files(&self) -> Result<Vec<SourceFile>, Self::Error>;

    /// Read one file as flat text. Unsupported formats yield empty text
    /// rather than an error.
    fn read_text(&self, file: &SourceFile) -> Result<String, Self::Error>;
}

/// Trait for the result sink (the spreadsheet collaborator)
pub trait RecordSink {
    /// Error type for sink operations
    type Error;

    /// Write one record as ordered `[heading, content]` rows under the given
    /// sheet name
    fn write_record(&mut self, sheet_name: &str, rows: &[[String; 2]]) -> Result<(), Self::Error>;
}
