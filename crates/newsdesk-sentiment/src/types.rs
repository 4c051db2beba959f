use serde::Serialize;

/// A headline as delivered by a feed. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Entry title. May be empty when the feed omits it.
    pub title: String,
    /// Entry link. Not validated.
    pub link: String,
}

impl Article {
    #[must_use]
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Three-way sentiment class derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Summary-table order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Strict sign rule: `> 0` is positive, `< 0` is negative, anything else
    /// (exact zero, and NaN) is neutral. No tolerance band around zero.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// An [`Article`] with its classification attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedArticle {
    pub title: String,
    pub link: String,
    pub sentiment: SentimentLabel,
    /// Full-precision polarity in `[-1.0, 1.0]`.
    pub polarity: f64,
}

impl EnrichedArticle {
    /// Polarity rounded to two decimal places, for display only.
    ///
    /// Exact halves round to the even neighbour, so `0.125` shows as `0.12`.
    #[must_use]
    pub fn display_polarity(&self) -> f64 {
        (self.polarity * 100.0).round_ties_even() / 100.0
    }
}

/// Per-label article counts for one pipeline run.
///
/// All three labels are always present; `total()` equals the number of
/// classified articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// `(label, count)` pairs in summary-table order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        SentimentLabel::ALL
            .into_iter()
            .map(move |label| (label, self.count(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_polarity_is_positive() {
        assert_eq!(SentimentLabel::from_polarity(0.3), SentimentLabel::Positive);
    }

    #[test]
    fn negative_polarity_is_negative() {
        assert_eq!(SentimentLabel::from_polarity(-0.3), SentimentLabel::Negative);
    }

    #[test]
    fn exact_zero_is_neutral() {
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn tiny_nonzero_polarity_is_not_neutral() {
        assert_eq!(
            SentimentLabel::from_polarity(1e-12),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_polarity(-1e-12),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn nan_polarity_is_neutral() {
        assert_eq!(
            SentimentLabel::from_polarity(f64::NAN),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn label_displays_capitalized() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn display_polarity_rounds_to_two_places() {
        let article = EnrichedArticle {
            title: "t".to_string(),
            link: "l".to_string(),
            sentiment: SentimentLabel::Positive,
            polarity: 0.136_363_6,
        };
        assert!((article.display_polarity() - 0.14).abs() < f64::EPSILON);
        // Full precision is retained on the struct.
        assert!(article.polarity > 0.136);
    }

    #[test]
    fn display_polarity_rounds_exact_ties_to_even() {
        let at = |polarity: f64| EnrichedArticle {
            title: "t".to_string(),
            link: "l".to_string(),
            sentiment: SentimentLabel::from_polarity(polarity),
            polarity,
        };
        assert!((at(0.125).display_polarity() - 0.12).abs() < f64::EPSILON);
        assert!((at(0.625).display_polarity() - 0.62).abs() < f64::EPSILON);
        assert!((at(-0.125).display_polarity() + 0.12).abs() < f64::EPSILON);
        assert!((at(0.375).display_polarity() - 0.38).abs() < f64::EPSILON);
    }

    #[test]
    fn default_tally_has_all_labels_at_zero() {
        let tally = SentimentTally::default();
        let pairs: Vec<_> = tally.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (SentimentLabel::Positive, 0),
                (SentimentLabel::Negative, 0),
                (SentimentLabel::Neutral, 0),
            ]
        );
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn record_increments_matching_label() {
        let mut tally = SentimentTally::default();
        tally.record(SentimentLabel::Negative);
        tally.record(SentimentLabel::Negative);
        tally.record(SentimentLabel::Neutral);
        assert_eq!(tally.count(SentimentLabel::Negative), 2);
        assert_eq!(tally.count(SentimentLabel::Neutral), 1);
        assert_eq!(tally.count(SentimentLabel::Positive), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn label_serializes_as_display_name() {
        let json = serde_json::to_string(&SentimentLabel::Neutral).expect("serialize");
        assert_eq!(json, "\"Neutral\"");
    }
}
