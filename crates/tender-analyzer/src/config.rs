//! Configuration for the analysis pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the tender analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum chunk size in characters. A single paragraph larger than
    /// this is still emitted whole.
    pub max_chunk_size: usize,

    /// Maximum length of a single normalized line, in characters
    pub max_line_length: usize,

    /// Target length for the consolidated requirement summary, in characters
    pub summary_char_limit: usize,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        if self.max_line_length == 0 {
            return Err("max_line_length must be greater than 0".to_string());
        }
        if self.summary_char_limit == 0 {
            return Err("summary_char_limit must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 2000,
            max_line_length: 1000,
            summary_char_limit: 200,
        }
    }
}
