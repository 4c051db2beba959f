//! Headline sentiment pipeline for newsdesk.
//!
//! Fetches a syndicated feed, classifies each headline's polarity, tallies
//! the labels, and narrows the result by keyword. Feed retrieval and
//! polarity scoring sit behind the [`FeedSource`] and [`PolarityScorer`]
//! traits so the pipeline can run against deterministic fakes.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod search;
pub mod sources;
pub mod types;
pub mod wordcloud;

pub use aggregate::aggregate;
pub use classifier::SentimentClassifier;
pub use error::SentimentError;
pub use pipeline::{build_news_view, run_news_pipeline, NewsView};
pub use scorer::{LexiconScorer, PolarityScorer};
pub use search::{autocomplete, filter_articles, results_heading, MAX_SUGGESTIONS};
pub use sources::{parse_feed, FeedSource, HttpFeedSource};
pub use types::{Article, EnrichedArticle, SentimentLabel, SentimentTally};
pub use wordcloud::{
    join_titles, term_frequencies, Raster, SvgWordCloud, TermFrequency, WordCloudRenderer,
};
