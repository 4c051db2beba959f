//! RSS/Atom body parsing.

use feed_rs::model::Link;

use crate::error::SentimentError;
use crate::types::Article;

/// Parse an RSS, Atom, or JSON Feed document into [`Article`]s.
///
/// Each entry maps to one article: the title text (empty when absent) and
/// the story link (empty when absent). Entries are kept in document order,
/// without dedupe or trimming.
///
/// # Errors
///
/// Returns [`SentimentError::FeedParse`] if the body is not a recognizable feed.
pub fn parse_feed(body: &[u8]) -> Result<Vec<Article>, SentimentError> {
    let feed = feed_rs::parser::parse(body)?;

    let articles = feed
        .entries
        .into_iter()
        .map(|entry| Article {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link: story_link(entry.links),
        })
        .collect();

    Ok(articles)
}

/// The `alternate` link (or one with no `rel`), else the first link.
fn story_link(links: Vec<Link>) -> String {
    let alternate = links
        .iter()
        .position(|l| matches!(l.rel.as_deref(), None | Some("alternate")));
    links
        .into_iter()
        .nth(alternate.unwrap_or(0))
        .map(|l| l.href)
        .unwrap_or_default()
}
