//! News command handlers for the CLI.

mod render;

use std::path::Path;

use newsdesk_core::{AppConfig, FeedEntry, FeedRegistry};
use newsdesk_sentiment::{
    run_news_pipeline, HttpFeedSource, LexiconScorer, NewsView, SentimentClassifier,
    SvgWordCloud, WordCloudRenderer,
};

pub(crate) use render::{render_feeds, render_news_view};

/// Resolve `--feed`, defaulting to the registry's first entry.
///
/// # Errors
///
/// Returns an error naming the known feeds if `name` is not registered.
pub(crate) fn select_feed<'a>(
    registry: &'a FeedRegistry,
    name: Option<&str>,
) -> anyhow::Result<&'a FeedEntry> {
    registry.resolve(name).ok_or_else(|| {
        let known = registry.names().collect::<Vec<_>>().join(", ");
        anyhow::anyhow!(
            "feed '{}' not found; known feeds: [{known}]",
            name.unwrap_or_default()
        )
    })
}

/// Fetch `feed` and build its view for `query`.
async fn load_view(config: &AppConfig, feed: &FeedEntry, query: &str) -> anyhow::Result<NewsView> {
    let source = HttpFeedSource::new(config.fetch_timeout_secs, &config.user_agent)?;
    let classifier = SentimentClassifier::new(LexiconScorer::new());

    tracing::debug!(feed = %feed.name, url = %feed.url, "running news pipeline");
    Ok(run_news_pipeline(&source, &classifier, &feed.url, query).await)
}

/// Print the configured feeds.
pub(crate) fn run_feeds(registry: &FeedRegistry) {
    print!("{}", render_feeds(registry));
}

/// Run the pipeline for one feed and print the filtered view.
///
/// # Errors
///
/// Returns an error if the feed name is unknown, the HTTP client cannot be
/// built, or JSON serialization fails. Fetch failures are not errors; they
/// print as "No news data available."
pub(crate) async fn run_news(
    config: &AppConfig,
    registry: &FeedRegistry,
    feed_name: Option<&str>,
    query: &str,
    json: bool,
) -> anyhow::Result<()> {
    let feed = select_feed(registry, feed_name)?;
    let view = load_view(config, feed, query).await?;

    if json {
        let out = serde_json::json!({
            "feed": feed,
            "layout": config.layout_mode,
            "view": view,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_news_view(&feed.name, &view, config.layout_mode));
    }

    Ok(())
}

/// Print up to five suggested titles for `query`.
///
/// # Errors
///
/// Returns an error if the feed name is unknown or the HTTP client cannot be built.
pub(crate) async fn run_suggest(
    config: &AppConfig,
    registry: &FeedRegistry,
    feed_name: Option<&str>,
    query: &str,
) -> anyhow::Result<()> {
    let feed = select_feed(registry, feed_name)?;
    let view = load_view(config, feed, query).await?;

    if view.suggestions.is_empty() {
        println!("no suggestions for '{query}'");
        return Ok(());
    }

    for suggestion in &view.suggestions {
        println!("{suggestion}");
    }

    Ok(())
}

/// Render the feed's word cloud and write it to `output` (or stdout).
///
/// # Errors
///
/// Returns an error if the feed name is unknown, the HTTP client cannot be
/// built, or the output file cannot be written.
pub(crate) async fn run_wordcloud(
    config: &AppConfig,
    registry: &FeedRegistry,
    feed_name: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let feed = select_feed(registry, feed_name)?;
    let view = load_view(config, feed, "").await?;

    if view.is_empty() {
        println!("No news data available.");
        return Ok(());
    }

    let raster = SvgWordCloud.render(&view.word_cloud_text);

    match output {
        Some(path) => {
            std::fs::write(path, &raster.bytes)?;
            tracing::info!(path = %path.display(), bytes = raster.bytes.len(), "wrote word cloud");
            println!("wrote {} ({})", path.display(), raster.media_type);
        }
        None => println!("{}", String::from_utf8_lossy(&raster.bytes)),
    }

    Ok(())
}

#[cfg(test)]
#[path = "news_test.rs"]
mod tests;
