//! Keyword filtering and autocomplete over headline titles.

use crate::types::{Article, EnrichedArticle};

/// Maximum number of autocomplete suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Case-insensitive substring test shared by filtering and autocomplete.
fn title_matches(title: &str, needle_lower: &str) -> bool {
    title.to_lowercase().contains(needle_lower)
}

/// Keep the articles whose title contains `query`, ignoring case.
///
/// An empty query means "no filter": the input is returned unchanged.
/// Matches keep their original relative order.
#[must_use]
pub fn filter_articles(articles: &[EnrichedArticle], query: &str) -> Vec<EnrichedArticle> {
    if query.is_empty() {
        return articles.to_vec();
    }

    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|a| title_matches(&a.title, &needle))
        .cloned()
        .collect()
}

/// Suggest up to [`MAX_SUGGESTIONS`] raw titles containing `query`, in
/// encounter order.
///
/// Runs the same substring test as [`filter_articles`] directly on the
/// fetched titles, independent of classification. An empty query matches
/// every title, so the first five titles are suggested.
#[must_use]
pub fn autocomplete(articles: &[Article], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|a| title_matches(&a.title, &needle))
        .take(MAX_SUGGESTIONS)
        .map(|a| a.title.clone())
        .collect()
}

/// Header shown above the article list.
#[must_use]
pub fn results_heading(query: &str) -> String {
    if query.is_empty() {
        "All News Articles:".to_string()
    } else {
        format!("Results for: {query}")
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
