//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, LLM, Feeds).
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::types::{FeedItem, MessageFormat};
use async_trait::async_trait;

/// Abstract interface for a Chat Provider bound to one room (e.g., Matrix)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room, returning the event id
    async fn send_message(&self, content: &str, format: MessageFormat) -> Result<String, String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for an LLM Provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for a single user prompt
    async fn completion(&self, prompt: &str, model: &str) -> Result<String, String>;
}

/// Abstract interface for a syndication feed source
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the feed at `url` and return its first item, if it has any
    async fn latest_item(&self, url: &str) -> Result<Option<FeedItem>, String>;
}
