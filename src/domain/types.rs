//! # Domain Types
//!
//! Common data structures and enums used across the application logic.

use std::fmt;

/// A single headline taken from a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
}

impl FeedItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

impl fmt::Display for FeedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.link)
    }
}

/// Markup mode of an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    Markdown,
    Plain,
}

/// The five generated sections of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    Insight,
    Focus,
    Trivia,
    Pattern,
    Tool,
}

impl SnippetKind {
    pub fn as_str(&self) -> &str {
        match self {
            SnippetKind::Insight => "insight",
            SnippetKind::Focus => "focus",
            SnippetKind::Trivia => "trivia",
            SnippetKind::Pattern => "pattern",
            SnippetKind::Tool => "tool",
        }
    }
}

/// One composed digest. Built per run, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestMessage {
    pub date_label: String,
    pub headlines: Vec<String>,
    pub insight: String,
    pub focus: String,
    pub trivia: String,
    pub pattern: String,
    pub tool: String,
}

/// Result of a single pipeline trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Digest composed and sent.
    Delivered,
    /// A required section failed; nothing was sent.
    Aborted,
    /// Digest composed but the send failed.
    DeliveryFailed,
    /// Another run was in flight; this trigger was dropped.
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_item_display() {
        let item = FeedItem::new("T1", "https://l1.example");
        assert_eq!(item.to_string(), "T1 - https://l1.example");
        assert_eq!(FeedItem::new("", "").to_string(), " - ");
    }
}
