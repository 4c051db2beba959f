//! News pipeline orchestration.

use serde::Serialize;

use crate::aggregate::aggregate;
use crate::classifier::SentimentClassifier;
use crate::scorer::PolarityScorer;
use crate::search::{autocomplete, filter_articles, results_heading};
use crate::sources::FeedSource;
use crate::types::{Article, EnrichedArticle, SentimentTally};
use crate::wordcloud::join_titles;

/// Everything the display layer needs for one feed + query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsView {
    /// Every fetched article, classified, in feed order.
    pub articles: Vec<EnrichedArticle>,
    pub tally: SentimentTally,
    /// `articles` narrowed by the query.
    pub filtered: Vec<EnrichedArticle>,
    /// At most five raw titles matching the query.
    pub suggestions: Vec<String>,
    /// Header for the article list.
    pub heading: String,
    /// All titles joined for the word cloud.
    pub word_cloud_text: String,
}

impl NewsView {
    /// `true` when the feed yielded no articles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Build the view from already-fetched articles.
///
/// Pure and synchronous: the same articles, scorer, and query always
/// produce the same view.
pub fn build_news_view<S: PolarityScorer>(
    classifier: &SentimentClassifier<S>,
    articles: &[Article],
    query: &str,
) -> NewsView {
    let (enriched, tally) = aggregate(classifier, articles);
    let filtered = filter_articles(&enriched, query);
    let suggestions = autocomplete(articles, query);
    let word_cloud_text = join_titles(enriched.iter().map(|a| a.title.as_str()));

    NewsView {
        articles: enriched,
        tally,
        filtered,
        suggestions,
        heading: results_heading(query),
        word_cloud_text,
    }
}

/// Fetch one feed and build its view.
///
/// 1. Fetch articles from `source` (failures arrive as an empty list).
/// 2. Classify and tally every title.
/// 3. Filter by `query` and compute autocomplete suggestions.
///
/// Nothing is cached between calls.
pub async fn run_news_pipeline<F, S>(
    source: &F,
    classifier: &SentimentClassifier<S>,
    feed_url: &str,
    query: &str,
) -> NewsView
where
    F: FeedSource,
    S: PolarityScorer,
{
    let articles = source.fetch(feed_url).await;

    if articles.is_empty() {
        tracing::info!(feed_url, "no articles fetched; returning empty view");
    }

    let view = build_news_view(classifier, &articles, query);

    tracing::info!(
        feed_url,
        articles = view.articles.len(),
        matched = view.filtered.len(),
        "news pipeline complete"
    );

    view
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
