//! # LLM
//!
//! Minimal wrapper around an OpenAI-compatible chat-completion endpoint.
//!
//! ```rust,ignore
//! let client = Client::new(ProviderConfig::from_completion_config(&config.services.openai)?)?;
//! let response = client.prompt_with_model("gpt-4", "Give a fun, short programming trivia or fact.").await?;
//! println!("{}", response.content);
//! ```

mod client;
pub mod providers;
mod types;

pub use client::Client;
pub use providers::ProviderConfig;

pub use types::{Context, Error, Response, TokenUsage};
