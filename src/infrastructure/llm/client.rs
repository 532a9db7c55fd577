//! # LLM Client
//!
//! Provides the `Client` struct, the long-lived handle for completion requests.
//! Holds the HTTP connection pool and provider settings for the process lifetime.

use crate::domain::traits::LlmProvider;
use crate::infrastructure::llm::providers::{self, ProviderConfig};
use crate::infrastructure::llm::{Context, Error, Response};
use async_trait::async_trait;

pub struct Client {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl Client {
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::new("openai", format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    /// Send a prompt with a specific model
    pub async fn prompt_with_model(&self, model: &str, prompt: &str) -> Result<Response, Error> {
        let context = Context::prompt(prompt).with_model(model);
        providers::openai::chat(&self.http, &self.config, context).await
    }

    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }
}

#[async_trait]
impl LlmProvider for Client {
    async fn completion(&self, prompt: &str, model: &str) -> Result<String, String> {
        let response = self
            .prompt_with_model(model, prompt)
            .await
            .map_err(|e| e.to_string())?;
        tracing::debug!(
            "Completion from {} used {} tokens ({} prompt, {} completion)",
            response.model,
            response.usage.total_tokens,
            response.usage.prompt_tokens,
            response.usage.completion_tokens
        );
        Ok(response.content)
    }
}
