//! # LLM Providers
//!
//! Provider configuration and the OpenAI-compatible request implementation.

pub(crate) mod openai;

use crate::domain::config::CompletionConfig;
use crate::infrastructure::llm::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for a provider
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// API key
    pub api_key: String,
    /// Base URL (for non-default endpoints)
    pub base_url: Option<String>,
    /// Default model
    pub default_model: String,
    /// Timeout in seconds
    pub timeout: Option<u64>,
}

impl ProviderConfig {
    pub fn from_completion_config(config: &CompletionConfig) -> Result<Self, Error> {
        let api_key = config
            .api_key()
            .map_err(|e| Error::new("openai", format!("{e:#}")))?;

        Ok(Self {
            api_key,
            base_url: config.endpoint.clone(),
            default_model: config.model.clone(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}
