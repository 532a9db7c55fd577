//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, LlmProvider, FeedSource).

pub mod feeds;
pub mod llm;
pub mod matrix;
