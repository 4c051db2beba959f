use newsdesk_core::LayoutMode;
use newsdesk_sentiment::{build_news_view, Article, PolarityScorer};

use super::*;

/// Scores titles containing "rally" positive and "cut" negative.
struct KeywordScorer;

impl PolarityScorer for KeywordScorer {
    fn polarity(&self, text: &str) -> f64 {
        if text.contains("rally") {
            0.456
        } else if text.contains("cut") {
            -0.2
        } else {
            0.0
        }
    }
}

fn scenario_view(query: &str) -> NewsView {
    let articles = vec![
        Article::new("Markets rally on strong earnings", "https://example.com/1"),
        Article::new("Fed signals rate cut", "https://example.com/2"),
        Article::new("Global markets flat", "https://example.com/3"),
    ];
    build_news_view(&SentimentClassifier::new(KeywordScorer), &articles, query)
}

// -----------------------------------------------------------------------
// select_feed
// -----------------------------------------------------------------------

#[test]
fn select_feed_defaults_to_first_entry() {
    let registry = FeedRegistry::builtin();
    let feed = select_feed(&registry, None).expect("default feed");
    assert_eq!(feed.name, "NPR: Business News");
}

#[test]
fn select_feed_finds_named_entry() {
    let registry = FeedRegistry::builtin();
    let feed = select_feed(&registry, Some("Investing News")).expect("named feed");
    assert_eq!(feed.url, "https://www.investing.com/rss/news.rss");
}

#[test]
fn select_feed_unknown_lists_known_names() {
    let registry = FeedRegistry::builtin();
    let err = select_feed(&registry, Some("Daily Planet")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("feed 'Daily Planet' not found"), "got: {msg}");
    assert!(msg.contains("CNN: Latest News"), "got: {msg}");
}

// -----------------------------------------------------------------------
// render
// -----------------------------------------------------------------------

#[test]
fn render_feeds_lists_every_entry() {
    let out = render_feeds(&FeedRegistry::builtin());
    assert!(out.starts_with("NAME"));
    assert_eq!(out.lines().count(), 10);
    assert!(out.contains("http://rss.cnn.com/rss/edition.rss"));
}

#[test]
fn render_view_shows_filtered_articles_with_rounded_polarity() {
    let out = render_news_view("Test Feed", &scenario_view("market"), LayoutMode::Sidebar);
    assert!(out.contains("Results for: market"));
    assert!(out.contains("Markets rally on strong earnings"));
    assert!(out.contains("Read More: https://example.com/1"));
    assert!(out.contains("Sentiment: Positive (0.46)"));
    assert!(out.contains("Global markets flat"));
    assert!(!out.contains("Fed signals rate cut"));
}

#[test]
fn render_view_summary_counts_all_articles() {
    let out = render_news_view("Test Feed", &scenario_view("market"), LayoutMode::Sidebar);
    assert!(out.contains("Positive    1"));
    assert!(out.contains("Negative    1"));
    assert!(out.contains("Neutral     1"));
}

#[test]
fn render_view_layout_controls_section_order() {
    let view = scenario_view("");
    let sidebar = render_news_view("Test Feed", &view, LayoutMode::Sidebar);
    let main = render_news_view("Test Feed", &view, LayoutMode::Main);

    let summary_pos = |s: &str| s.find("Sentiment Summary").expect("summary present");
    let heading_pos = |s: &str| s.find("All News Articles:").expect("heading present");

    assert!(heading_pos(&sidebar) < summary_pos(&sidebar));
    assert!(summary_pos(&main) < heading_pos(&main));
}

#[test]
fn render_view_no_match_says_so() {
    let out = render_news_view("Test Feed", &scenario_view("bitcoin"), LayoutMode::Main);
    assert!(out.contains("No news articles found."));
    assert!(out.contains("Sentiment Summary"));
}

#[test]
fn render_empty_view_says_no_data() {
    let view = build_news_view(&SentimentClassifier::new(KeywordScorer), &[], "");
    let out = render_news_view("Test Feed", &view, LayoutMode::Sidebar);
    assert!(out.contains("No news data available."));
    assert!(!out.contains("Sentiment Summary"));
}

#[test]
fn render_empty_view_is_title_and_notice_only() {
    let view = build_news_view(&SentimentClassifier::new(KeywordScorer), &[], "");
    assert_eq!(
        render_news_view("Test Feed", &view, LayoutMode::Main),
        "News Search & Sentiment Analysis: Test Feed\n\nNo news data available.\n"
    );
}

#[test]
fn render_main_layout_separates_summary_and_articles() {
    let out = render_news_view("Test Feed", &scenario_view("bitcoin"), LayoutMode::Main);
    assert_eq!(
        out,
        "News Search & Sentiment Analysis: Test Feed\n\n\
         Sentiment Summary\n\
         SENTIMENT   COUNT\n\
         Positive    1\n\
         Negative    1\n\
         Neutral     1\n\
         \n\
         Results for: bitcoin\n\
         No news articles found.\n"
    );
}
