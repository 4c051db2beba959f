//! HTTP-backed feed source.

use std::time::Duration;

use reqwest::Client;

use super::parse::parse_feed;
use super::FeedSource;
use crate::error::SentimentError;
use crate::types::Article;

/// Fetches feeds over HTTP and parses them with `feed-rs`.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    /// Creates a source with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch and parse one feed, surfacing failures as typed errors.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::Http`] on network failure.
    /// - [`SentimentError::UnexpectedStatus`] on any non-2xx response.
    /// - [`SentimentError::FeedParse`] when the body is not a feed.
    pub async fn try_fetch(&self, feed_url: &str) -> Result<Vec<Article>, SentimentError> {
        let response = self
            .client
            .get(feed_url)
            .header(
                reqwest::header::ACCEPT,
                "application/rss+xml, application/atom+xml, application/xml;q=0.9, */*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::UnexpectedStatus {
                status: status.as_u16(),
                url: feed_url.to_string(),
            });
        }

        let body = response.bytes().await?;
        parse_feed(&body)
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch(&self, feed_url: &str) -> Vec<Article> {
        match self.try_fetch(feed_url).await {
            Ok(articles) => {
                tracing::debug!(feed_url, count = articles.len(), "fetched feed");
                articles
            }
            Err(e) => {
                tracing::warn!(feed_url, error = %e, "feed fetch failed; treating as empty");
                Vec::new()
            }
        }
    }
}
