//! Environment-driven configuration.
//!
//! All required values are checked up front so a misconfigured run fails at
//! startup with every missing variable listed, before any backend call is
//! made.

use crate::error::{CliError, Result};
use std::env;
use std::path::PathBuf;

/// Default sheet name when the record carries no project name
pub const DEFAULT_SHEET_NAME: &str = "デフォルト案件名";

/// Runtime configuration, built once at process start and passed by
/// reference into collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the source tender documents
    pub input_dir: PathBuf,

    /// Directory the result sheet is written into
    pub output_dir: PathBuf,

    /// Sheet name used when the analysis yields no project name
    pub default_sheet_name: String,

    /// API key for the language-model backend
    pub api_key: String,

    /// Optional model identifier override
    pub model: Option<String>,
}

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` listing every missing required variable.
    pub fn from_env() -> Result<Self> {
        let required = [
            ("TENDER_INPUT_DIR", "対象の文書フォルダ"),
            ("TENDER_OUTPUT_DIR", "出力先フォルダ"),
            ("OPENAI_API_KEY", "OpenAI APIキー"),
        ];

        let missing: Vec<String> = required
            .iter()
            .filter(|(key, _)| env_opt(key).is_none())
            .map(|(key, description)| format!("{} ({})", key, description))
            .collect();

        if !missing.is_empty() {
            return Err(CliError::Config(format!(
                "必須の環境変数が設定されていません: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            input_dir: PathBuf::from(env_opt("TENDER_INPUT_DIR").unwrap_or_default()),
            output_dir: PathBuf::from(env_opt("TENDER_OUTPUT_DIR").unwrap_or_default()),
            default_sheet_name: env_opt("TENDER_SHEET_NAME")
                .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            api_key: env_opt("OPENAI_API_KEY").unwrap_or_default(),
            model: env_opt("GPT_MODEL"),
        })
    }
}
