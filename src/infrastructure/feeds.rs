//! # Feed Source Adapter
//!
//! Implements the `FeedSource` trait over HTTP. Bodies are parsed with `feed_rs`,
//! which accepts RSS 0.9x/1.0/2.0, Atom and JSON Feed.

use crate::domain::traits::FeedSource;
use crate::domain::types::FeedItem;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Some publishers reject requests without a browser-like agent.
pub const USER_AGENT: &str = "Mozilla/5.0";

#[derive(Clone)]
pub struct HttpFeedSource {
    http: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create feed HTTP client")?;
        Ok(Self { http })
    }

    async fn fetch(&self, url: &str) -> Result<Option<FeedItem>> {
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        parse_first_item(&body)
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn latest_item(&self, url: &str) -> Result<Option<FeedItem>, String> {
        self.fetch(url).await.map_err(|e| format!("{e:#}"))
    }
}

/// Parse a feed document and return its first entry.
pub fn parse_first_item(body: &[u8]) -> Result<Option<FeedItem>> {
    let feed = feed_rs::parser::parse(body).context("Malformed feed")?;
    Ok(feed.entries.into_iter().next().map(|entry| {
        let title = entry
            .title
            .map(|t| t.content.trim().to_string())
            .unwrap_or_default();
        let link = entry
            .links
            .into_iter()
            .next()
            .map(|l| l.href)
            .unwrap_or_default();
        FeedItem::new(title, link)
    }))
}
