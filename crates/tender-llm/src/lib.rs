//! Tender Analyzer LLM Backend Layer
//!
//! Implementations of the `LlmBackend` trait from `tender-domain`.
//!
//! # Backends
//!
//! - `MockBackend`: Deterministic mock for testing
//! - `OpenAiBackend`: Chat-completions API client with JSON-object response
//!   mode and a fixed-interval rate gate
//!
//! # Examples
//!
//! ```
//! use tender_llm::MockBackend;
//! use tender_domain::{ChatRequest, LlmBackend};
//!
//! let backend = MockBackend::new(r#"{"項目": {}}"#);
//! let request = ChatRequest::new("system", "user");
//! let result = backend.complete(&request).unwrap();
//! assert_eq!(result, r#"{"項目": {}}"#);
//! ```

#![warn(missing_docs)]

pub mod openai;
pub mod rate;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tender_domain::{ChatRequest, LlmBackend};
use thiserror::Error;

pub use openai::OpenAiBackend;
pub use rate::RateGate;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the backend
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// API key is missing or empty
    #[error("API key is not set")]
    MissingApiKey,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Sentinel value in the mock response table marking a scripted error
const ERROR_SENTINEL: &str = "ERROR";

/// Mock LLM backend for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are keyed by the user prompt; unmatched prompts get the
/// default response.
///
/// # Examples
///
/// ```
/// use tender_llm::MockBackend;
/// use tender_domain::{ChatRequest, LlmBackend};
///
/// let mut backend = MockBackend::new("default");
/// backend.add_response("prompt1", "response1");
///
/// let hit = ChatRequest::new("sys", "prompt1");
/// assert_eq!(backend.complete(&hit).unwrap(), "response1");
///
/// let miss = ChatRequest::new("sys", "anything else");
/// assert_eq!(backend.complete(&miss).unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct MockBackend {
    default_response: String,
    always_fail: bool,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockBackend {
    /// Create a new MockBackend with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            always_fail: false,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a backend whose every call fails
    pub fn failing() -> Self {
        Self {
            always_fail: true,
            ..Self::new("")
        }
    }

    /// Add a specific response for a given user prompt
    pub fn add_response(&mut self, user_prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user_prompt.into(), response.into());
    }

    /// Configure an error for a specific user prompt
    pub fn add_error(&mut self, user_prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user_prompt.into(), ERROR_SENTINEL.to_string());
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmBackend for MockBackend {
    type Error = LlmError;

    fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if self.always_fail {
            return Err(LlmError::Other("Mock error".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(&request.user) {
            if response == ERROR_SENTINEL {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user: &str) -> ChatRequest {
        ChatRequest::new("system", user)
    }

    #[test]
    fn test_mock_backend_default() {
        let backend = MockBackend::new("Test response");
        let result = backend.complete(&request("any prompt"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_backend_specific_responses() {
        let mut backend = MockBackend::default();
        backend.add_response("hello", "world");
        backend.add_response("foo", "bar");

        assert_eq!(backend.complete(&request("hello")).unwrap(), "world");
        assert_eq!(backend.complete(&request("foo")).unwrap(), "bar");
        assert_eq!(
            backend.complete(&request("unknown")).unwrap(),
            "Default mock response"
        );
    }

    #[test]
    fn test_mock_backend_call_count() {
        let backend = MockBackend::new("test");

        assert_eq!(backend.call_count(), 0);

        backend.complete(&request("prompt1")).unwrap();
        assert_eq!(backend.call_count(), 1);

        backend.complete(&request("prompt2")).unwrap();
        assert_eq!(backend.call_count(), 2);

        backend.reset_call_count();
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_mock_backend_error() {
        let mut backend = MockBackend::default();
        backend.add_error("bad prompt");

        let result = backend.complete(&request("bad prompt"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_backend_failing() {
        let backend = MockBackend::failing();
        assert!(backend.complete(&request("anything")).is_err());
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_mock_backend_clone_shares_call_count() {
        let backend1 = MockBackend::new("test");
        let backend2 = backend1.clone();

        backend1.complete(&request("test")).unwrap();

        assert_eq!(backend1.call_count(), 1);
        assert_eq!(backend2.call_count(), 1);
    }
}
