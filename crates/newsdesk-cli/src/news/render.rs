//! Plain-text rendering of feeds and news views.

use newsdesk_core::{FeedRegistry, LayoutMode};
use newsdesk_sentiment::NewsView;

/// Joins lines with a trailing newline after each.
fn to_block(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

pub(crate) fn render_feeds(registry: &FeedRegistry) -> String {
    let mut lines = vec![format!("{:<26}URL", "NAME")];
    lines.extend(
        registry
            .entries()
            .iter()
            .map(|entry| format!("{:<26}{}", entry.name, entry.url)),
    );
    to_block(&lines)
}

fn render_summary(view: &NewsView) -> String {
    let mut lines = vec![
        "Sentiment Summary".to_string(),
        format!("{:<12}COUNT", "SENTIMENT"),
    ];
    lines.extend(
        view.tally
            .iter()
            .map(|(label, count)| format!("{:<12}{count}", label.to_string())),
    );
    to_block(&lines)
}

fn render_articles(view: &NewsView) -> String {
    let mut lines = vec![view.heading.clone()];

    if view.filtered.is_empty() {
        lines.push("No news articles found.".to_string());
        return to_block(&lines);
    }

    for article in &view.filtered {
        lines.push(article.title.clone());
        lines.push(format!("Read More: {}", article.link));
        lines.push(format!(
            "Sentiment: {} ({:.2})",
            article.sentiment,
            article.display_polarity()
        ));
        lines.push("---".to_string());
    }

    lines.push("Sentiment Analysis Table".to_string());
    lines.push(format!("{:<10}{:<10}TITLE", "SENTIMENT", "POLARITY"));
    lines.extend(view.filtered.iter().map(|article| {
        format!(
            "{:<10}{:<10.2}{}",
            article.sentiment.to_string(),
            article.display_polarity(),
            article.title
        )
    }));
    to_block(&lines)
}

/// Render a view for the terminal.
///
/// `LayoutMode::Main` puts the summary above the article list; `Sidebar`
/// puts it after. An empty feed renders a single notice.
pub(crate) fn render_news_view(feed_name: &str, view: &NewsView, layout: LayoutMode) -> String {
    let title = format!("News Search & Sentiment Analysis: {feed_name}\n\n");

    if view.is_empty() {
        return format!("{title}No news data available.\n");
    }

    let summary = render_summary(view);
    let articles = render_articles(view);

    match layout {
        LayoutMode::Main => format!("{title}{summary}\n{articles}"),
        LayoutMode::Sidebar => format!("{title}{articles}\n{summary}"),
    }
}
