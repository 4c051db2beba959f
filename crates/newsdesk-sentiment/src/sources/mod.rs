//! Feed source abstractions.

mod http;
mod parse;

use std::future::Future;

pub use http::HttpFeedSource;
pub use parse::parse_feed;

use crate::types::Article;

/// Turns a feed URL into the articles it currently lists.
///
/// Implementations absorb every failure (unreachable host, bad status,
/// malformed XML) into an empty list; callers treat "no articles" as a
/// normal outcome. Order is whatever the feed provides.
pub trait FeedSource {
    fn fetch(&self, feed_url: &str) -> impl Future<Output = Vec<Article>> + Send;
}
