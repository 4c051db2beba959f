//! Per-run classification and tallying.

use crate::classifier::SentimentClassifier;
use crate::scorer::PolarityScorer;
use crate::types::{Article, EnrichedArticle, SentimentTally};

/// Classify every article's title and count the labels.
///
/// Produces exactly one [`EnrichedArticle`] per input, in input order, and a
/// tally whose total equals the number of outputs. Empty input yields an
/// empty list and an all-zero tally.
pub fn aggregate<S: PolarityScorer>(
    classifier: &SentimentClassifier<S>,
    articles: &[Article],
) -> (Vec<EnrichedArticle>, SentimentTally) {
    let mut tally = SentimentTally::default();
    let mut enriched = Vec::with_capacity(articles.len());

    for article in articles {
        let (sentiment, polarity) = classifier.classify(&article.title);
        tally.record(sentiment);
        enriched.push(EnrichedArticle {
            title: article.title.clone(),
            link: article.link.clone(),
            sentiment,
            polarity,
        });
    }

    tracing::debug!(
        count = enriched.len(),
        positive = tally.positive,
        negative = tally.negative,
        neutral = tally.neutral,
        "aggregated article sentiment"
    );

    (enriched, tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::LexiconScorer;
    use crate::types::SentimentLabel;

    /// Scores by the leading character: `+` positive, `-` negative, else zero.
    struct PrefixScorer;

    impl PolarityScorer for PrefixScorer {
        fn polarity(&self, text: &str) -> f64 {
            match text.chars().next() {
                Some('+') => 0.25,
                Some('-') => -0.75,
                _ => 0.0,
            }
        }
    }

    fn article(title: &str) -> Article {
        Article::new(title, format!("https://example.com/{}", title.len()))
    }

    #[test]
    fn empty_input_yields_empty_output_and_zero_tally() {
        let classifier = SentimentClassifier::new(LexiconScorer);
        let (enriched, tally) = aggregate(&classifier, &[]);
        assert!(enriched.is_empty());
        assert_eq!(tally, SentimentTally::default());
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn output_preserves_order_and_length() {
        let classifier = SentimentClassifier::new(PrefixScorer);
        let input = vec![article("+one"), article("two"), article("-three")];
        let (enriched, _) = aggregate(&classifier, &input);

        let titles: Vec<&str> = enriched.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["+one", "two", "-three"]);
        assert_eq!(enriched[0].link, input[0].link);
    }

    #[test]
    fn labels_and_tally_follow_scores() {
        let classifier = SentimentClassifier::new(PrefixScorer);
        let input = vec![
            article("+a"),
            article("+b"),
            article("-c"),
            article("d"),
            article(""),
        ];
        let (enriched, tally) = aggregate(&classifier, &input);

        assert_eq!(enriched[0].sentiment, SentimentLabel::Positive);
        assert_eq!(enriched[2].sentiment, SentimentLabel::Negative);
        assert_eq!(enriched[2].polarity, -0.75);
        assert_eq!(enriched[4].sentiment, SentimentLabel::Neutral);

        assert_eq!(tally.positive, 2);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 2);
        assert_eq!(tally.total(), enriched.len());
    }

    #[test]
    fn duplicate_articles_are_kept() {
        let classifier = SentimentClassifier::new(PrefixScorer);
        let input = vec![article("+dup"), article("+dup")];
        let (enriched, tally) = aggregate(&classifier, &input);
        assert_eq!(enriched.len(), 2);
        assert_eq!(tally.positive, 2);
    }
}
