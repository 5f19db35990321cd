//! OpenAI chat-completions backend
//!
//! Issues one deterministic-leaning completion call per request: low
//! temperature, bounded output tokens, JSON-object response mode. The
//! backend performs no retries of its own; a failed call surfaces as an
//! error and the caller decides what a lost chunk means.
//!
//! # Examples
//!
//! ```no_run
//! use tender_llm::OpenAiBackend;
//!
//! let backend = OpenAiBackend::new("sk-...").unwrap();
//! let backend = backend.with_model("gpt-4o-mini");
//! ```

use crate::rate::RateGate;
use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tender_domain::{ChatRequest, LlmBackend};
use tracing::debug;

/// Default chat-completions API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model when no override is configured
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Default timeout for backend requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default minimum interval between calls (the source system's 1 second)
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 1000;

/// Sampling temperature for extraction calls
const TEMPERATURE: f64 = 0.1;

/// Output token budget per call
const MAX_TOKENS: u32 = 2000;

/// Chat-completions API backend with a fixed-interval rate gate
pub struct OpenAiBackend {
    api_base: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    gate: RateGate,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiBackend {
    /// Create a new backend with the default endpoint, model, and rate gate
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingApiKey` when the key is empty, and
    /// `LlmError::Other` when the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            client,
            gate: RateGate::new(Duration::from_millis(DEFAULT_MIN_INTERVAL_MS)),
        })
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (e.g. for a compatible proxy)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Replace the rate gate
    pub fn with_rate_gate(mut self, gate: RateGate) -> Self {
        self.gate = gate;
        self
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue one completion call
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network communication fails
    /// - The model is not available
    /// - The API rate limit is exceeded
    /// - The response carries no content
    pub async fn complete_async(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.api_base);

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: request.system.clone(),
                },
                Message {
                    role: "user",
                    content: request.user.clone(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat { kind: "json_object" },
        };

        debug!(model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response carried no content".to_string()))?;

        Ok(content.trim().to_string())
    }
}

impl LlmBackend for OpenAiBackend {
    type Error = LlmError;

    fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        // The gate is engaged on the blocking side so every caller shares
        // the same budget regardless of how it schedules chunks.
        self.gate.wait();

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.complete_async(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_creation() {
        let backend = OpenAiBackend::new("test-key").unwrap();
        assert_eq!(backend.api_base, DEFAULT_API_BASE);
        assert_eq!(backend.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = OpenAiBackend::new("   ");
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn test_model_override() {
        let backend = OpenAiBackend::new("test-key")
            .unwrap()
            .with_model("gpt-4o-mini");
        assert_eq!(backend.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-4".to_string(),
            messages: vec![Message {
                role: "system",
                content: "sys".to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat { kind: "json_object" },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["temperature"], 0.1);
        assert_eq!(value["max_tokens"], 2000);
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "system");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let backend = OpenAiBackend::new("test-key")
            .unwrap()
            .with_api_base("http://127.0.0.1:1");

        let request = ChatRequest::new("sys", "user");
        let result = backend.complete_async(&request).await;

        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }
}
