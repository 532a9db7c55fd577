//! # Feed Reader
//!
//! Collects the newest headline from each configured feed.
//! A failing feed is logged and skipped; it never aborts the others.

use futures::future::join_all;
use std::sync::Arc;

use crate::domain::traits::FeedSource;
use crate::strings::logs;

pub struct FeedReader {
    source: Arc<dyn FeedSource>,
    urls: Vec<String>,
    limit: usize,
}

impl FeedReader {
    pub fn new(source: Arc<dyn FeedSource>, urls: Vec<String>, limit: usize) -> Self {
        Self { source, urls, limit }
    }

    /// One `"<title> - <link>"` line per successful feed, in URL order, at most `limit`.
    pub async fn headlines(&self) -> Vec<String> {
        let fetches = self.urls.iter().map(|url| async move {
            match self.source.latest_item(url).await {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!("{}", logs::feed_failed(url, &e));
                    None
                }
            }
        });

        join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .take(self.limit)
            .map(|item| item.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockFeeds;

    const A: &str = "https://a.example/feed";
    const B: &str = "https://b.example/rss";
    const C: &str = "https://c.example/atom";

    fn reader(feeds: MockFeeds, urls: &[&str]) -> FeedReader {
        FeedReader::new(
            Arc::new(feeds),
            urls.iter().map(|u| u.to_string()).collect(),
            3,
        )
    }

    #[tokio::test]
    async fn test_all_feeds_succeed_in_url_order() {
        let feeds = MockFeeds::new()
            .item(A, "T1", "L1")
            .item(B, "T2", "L2")
            .item(C, "T3", "L3");
        let headlines = reader(feeds, &[A, B, C]).headlines().await;
        assert_eq!(headlines, vec!["T1 - L1", "T2 - L2", "T3 - L3"]);
    }

    #[tokio::test]
    async fn test_failed_feeds_are_skipped() {
        let feeds = MockFeeds::new().item(B, "T2", "L2");
        let headlines = reader(feeds, &[A, B, C]).headlines().await;
        assert_eq!(headlines, vec!["T2 - L2"]);
    }

    #[tokio::test]
    async fn test_partial_success_counts() {
        for k in 0..=3 {
            let mut feeds = MockFeeds::new();
            let urls = [A, B, C];
            for (i, url) in urls.iter().take(k).enumerate() {
                feeds = feeds.item(url, &format!("T{}", i + 1), &format!("L{}", i + 1));
            }
            let headlines = reader(feeds, &urls).headlines().await;
            assert_eq!(headlines.len(), k);
            for (i, line) in headlines.iter().enumerate() {
                assert_eq!(line, &format!("T{} - L{}", i + 1, i + 1));
            }
        }
    }

    #[tokio::test]
    async fn test_empty_feed_contributes_nothing() {
        let feeds = MockFeeds::new().empty(A).item(B, "T2", "L2");
        let headlines = reader(feeds, &[A, B]).headlines().await;
        assert_eq!(headlines, vec!["T2 - L2"]);
    }

    #[tokio::test]
    async fn test_limit_caps_output() {
        let d = "https://d.example/feed";
        let feeds = MockFeeds::new()
            .item(A, "T1", "L1")
            .item(B, "T2", "L2")
            .item(C, "T3", "L3")
            .item(d, "T4", "L4");
        let headlines = reader(feeds, &[A, B, C, d]).headlines().await;
        assert_eq!(headlines, vec!["T1 - L1", "T2 - L2", "T3 - L3"]);
    }

    #[tokio::test]
    async fn test_no_urls() {
        assert!(reader(MockFeeds::new(), &[]).headlines().await.is_empty());
    }
}
