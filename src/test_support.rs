//! In-memory implementations of the domain traits.
//!
//! Configurable stand-ins for Matrix, the completion API and feed hosts, so the
//! pipeline and command handling can be exercised without network access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

use crate::domain::traits::{ChatProvider, FeedSource, LlmProvider};
use crate::domain::types::{FeedItem, MessageFormat};

// ============================================================================
// Chat
// ============================================================================

pub struct MockChat {
    room_id: String,
    fail: bool,
    sent: Mutex<Vec<(String, MessageFormat)>>,
}

impl MockChat {
    pub fn new(room_id: &str) -> Self {
        Self {
            room_id: room_id.to_string(),
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every send returns an error (still recorded as attempted)
    pub fn failing(room_id: &str) -> Self {
        Self {
            fail: true,
            ..Self::new(room_id)
        }
    }

    pub fn sent(&self) -> Vec<(String, MessageFormat)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    async fn send_message(&self, content: &str, format: MessageFormat) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((content.to_string(), format));
        if self.fail {
            return Err("M_FORBIDDEN: send rejected".to_string());
        }
        Ok(format!("$event{}", sent.len()))
    }

    fn room_id(&self) -> String {
        self.room_id.clone()
    }
}

// ============================================================================
// LLM
// ============================================================================

#[derive(Default)]
pub struct MockLlm {
    replies: HashMap<String, Result<String, String>>,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
}

impl MockLlm {
    /// Unknown prompts fail with a connection error
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, prompt: &str, text: &str) -> Self {
        self.replies.insert(prompt.to_string(), Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, prompt: &str, err: &str) -> Self {
        self.replies.insert(prompt.to_string(), Err(err.to_string()));
        self
    }

    /// Hold every completion until the gate has a permit
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for MockLlm {
    async fn completion(&self, prompt: &str, _model: &str) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _permit = match &self.gate {
            Some(gate) => Some(gate.acquire().await.map_err(|e| e.to_string())?),
            None => None,
        };
        self.replies
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| Err("connection refused".to_string()))
    }
}

// ============================================================================
// Feeds
// ============================================================================

#[derive(Default)]
pub struct MockFeeds {
    feeds: HashMap<String, Result<Option<FeedItem>, String>>,
}

impl MockFeeds {
    /// Unknown URLs fail with a DNS error
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, url: &str, title: &str, link: &str) -> Self {
        self.feeds
            .insert(url.to_string(), Ok(Some(FeedItem::new(title, link))));
        self
    }

    pub fn empty(mut self, url: &str) -> Self {
        self.feeds.insert(url.to_string(), Ok(None));
        self
    }
}

#[async_trait]
impl FeedSource for MockFeeds {
    async fn latest_item(&self, url: &str) -> Result<Option<FeedItem>, String> {
        self.feeds
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(format!("dns error: failed to lookup {url}")))
    }
}
