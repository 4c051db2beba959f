//! Sentiment classification of raw headline text.

use crate::scorer::PolarityScorer;
use crate::types::SentimentLabel;

/// Applies the strict sign rule to whatever polarity a scorer produces.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier<S> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Classify `text` exactly as given (no trimming, no case folding).
    ///
    /// Never fails: empty or non-linguistic text yields whatever the scorer
    /// returns for it, which for [`crate::LexiconScorer`] is `(Neutral, 0.0)`.
    pub fn classify(&self, text: &str) -> (SentimentLabel, f64) {
        let polarity = self.scorer.polarity(text);
        (SentimentLabel::from_polarity(polarity), polarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::LexiconScorer;

    /// Returns a fixed polarity for every input.
    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    /// Positive only for text that still has leading whitespace and capitals.
    struct RawTextScorer;

    impl PolarityScorer for RawTextScorer {
        fn polarity(&self, text: &str) -> f64 {
            if text.starts_with(' ') && text.chars().any(char::is_uppercase) {
                0.5
            } else {
                -0.5
            }
        }
    }

    #[test]
    fn empty_title_is_neutral_zero() {
        let classifier = SentimentClassifier::new(LexiconScorer);
        let (label, polarity) = classifier.classify("");
        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(polarity, 0.0);
    }

    #[test]
    fn sign_rule_is_strict_at_zero() {
        assert_eq!(
            SentimentClassifier::new(FixedScorer(0.0)).classify("x").0,
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentClassifier::new(FixedScorer(1e-12)).classify("x").0,
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentClassifier::new(FixedScorer(-1e-12)).classify("x").0,
            SentimentLabel::Negative
        );
    }

    #[test]
    fn polarity_is_returned_at_full_precision() {
        let (_, polarity) = SentimentClassifier::new(FixedScorer(0.123_456)).classify("x");
        assert_eq!(polarity, 0.123_456);
    }

    #[test]
    fn text_is_passed_through_unmodified() {
        let classifier = SentimentClassifier::new(RawTextScorer);
        assert_eq!(classifier.classify(" Fed Holds").0, SentimentLabel::Positive);
    }
}
