//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix connection, the completion API and the digest itself.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub digest: DigestConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Configuration for the connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
    pub openai: CompletionConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_env: Option<String>,
    /// The single room that receives the digest and may use `/now`.
    pub room_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl MatrixConfig {
    pub fn password(&self) -> Result<String> {
        resolve_secret("matrix password", &self.password, &self.password_env)
    }
}

/// Chat-completion endpoint settings (OpenAI-compatible).
#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds. None means no timeout.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl CompletionConfig {
    pub fn api_key(&self) -> Result<String> {
        resolve_secret("completion api key", &self.api_key, &self.api_key_env)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DigestConfig {
    /// Daily trigger as `HH:MM`, server local time.
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default = "default_headline_limit")]
    pub headline_limit: usize,
    #[serde(default = "default_feeds")]
    pub feeds: Vec<String>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            time: default_time(),
            headline_limit: default_headline_limit(),
            feeds: default_feeds(),
        }
    }
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_time() -> String {
    "08:00".to_string()
}

fn default_headline_limit() -> usize {
    3
}

fn default_feeds() -> Vec<String> {
    vec![
        "https://techcrunch.com/feed/".to_string(),
        "https://www.theverge.com/rss/index.xml".to_string(),
        "https://hnrss.org/frontpage".to_string(),
    ]
}

/// Inline value wins, otherwise read the named environment variable.
fn resolve_secret(what: &str, value: &Option<String>, env: &Option<String>) -> Result<String> {
    if let Some(v) = value {
        return Ok(v.clone());
    }
    if let Some(var) = env {
        return std::env::var(var).with_context(|| format!("{what}: env var {var} not set"));
    }
    Err(anyhow!("No {what} provided - set it inline or via an _env key"))
}
