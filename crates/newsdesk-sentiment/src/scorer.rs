//! Text polarity scoring.
//!
//! [`PolarityScorer`] is the seam the classifier depends on; [`LexiconScorer`]
//! is the bundled headline lexicon used when no other scorer is wired in.

/// Turns a piece of text into a signed polarity in `[-1.0, 1.0]`.
///
/// Implementations must accept any string, including the empty string.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> f64;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for &S {
    fn polarity(&self, text: &str) -> f64 {
        (**self).polarity(text)
    }
}

/// Headline word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("strong", 0.43),
    ("stronger", 0.43),
    ("new", 0.14),
    ("gain", 0.4),
    ("gains", 0.4),
    ("rally", 0.5),
    ("rallies", 0.5),
    ("surge", 0.4),
    ("surges", 0.4),
    ("soar", 0.5),
    ("soars", 0.5),
    ("record", 0.2),
    ("boost", 0.4),
    ("boosts", 0.4),
    ("growth", 0.3),
    ("grow", 0.3),
    ("growing", 0.3),
    ("win", 0.8),
    ("wins", 0.8),
    ("victory", 0.6),
    ("success", 0.6),
    ("successful", 0.75),
    ("hope", 0.4),
    ("hopeful", 0.5),
    ("optimism", 0.5),
    ("optimistic", 0.5),
    ("recover", 0.3),
    ("recovery", 0.3),
    ("rebound", 0.3),
    ("rebounds", 0.3),
    ("rise", 0.2),
    ("rises", 0.2),
    ("beat", 0.3),
    ("beats", 0.3),
    ("breakthrough", 0.6),
    ("approved", 0.4),
    ("deal", 0.2),
    ("agreement", 0.3),
    ("peace", 0.5),
    ("safe", 0.5),
    ("happy", 0.8),
    ("love", 0.5),
    ("popular", 0.6),
    ("top", 0.5),
    ("free", 0.4),
    // Negative signals
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("crisis", -0.6),
    ("crash", -0.6),
    ("crashes", -0.6),
    ("collapse", -0.7),
    ("fall", -0.3),
    ("falls", -0.3),
    ("plunge", -0.6),
    ("plunges", -0.6),
    ("slump", -0.5),
    ("slumps", -0.5),
    ("drop", -0.3),
    ("drops", -0.3),
    ("decline", -0.3),
    ("declines", -0.3),
    ("loss", -0.4),
    ("losses", -0.4),
    ("fear", -0.5),
    ("fears", -0.5),
    ("war", -0.6),
    ("attack", -0.6),
    ("attacks", -0.6),
    ("killed", -0.8),
    ("dead", -0.2),
    ("deadly", -0.8),
    ("death", -0.7),
    ("threat", -0.5),
    ("threatens", -0.5),
    ("warning", -0.4),
    ("warns", -0.4),
    ("fail", -0.5),
    ("fails", -0.5),
    ("failed", -0.5),
    ("failure", -0.5),
    ("fraud", -0.7),
    ("scandal", -0.6),
    ("lawsuit", -0.5),
    ("ban", -0.5),
    ("banned", -0.5),
    ("illegal", -0.5),
    ("recession", -0.6),
    ("layoffs", -0.5),
    ("cut", -0.2),
    ("cuts", -0.2),
    ("weak", -0.4),
    ("risk", -0.3),
    ("risky", -0.5),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("violence", -0.7),
    ("angry", -0.5),
    ("sad", -0.5),
    ("disaster", -0.9),
    ("bankrupt", -0.8),
    ("bankruptcy", -0.8),
    ("chaos", -0.6),
    ("shortage", -0.4),
    ("uncertain", -0.3),
    ("uncertainty", -0.3),
    ("volatile", -0.3),
];

/// Words that flip and damp the polarity of the next scored word.
const NEGATORS: &[&str] = &["not", "no", "never", "without", "nor"];

/// Multiplier applied to a word's polarity when it follows a negator.
const NEGATION_FACTOR: f64 = -0.5;

/// Words that amplify the polarity of the next scored word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("most", 1.3),
    ("so", 1.2),
];

/// Lexicon-backed [`PolarityScorer`] for news headlines.
///
/// Splits text on whitespace, trims non-alphabetic characters from each
/// word, and lowercases it. Matched lexicon weights are averaged; a
/// preceding negator multiplies a weight by `-0.5` and a preceding
/// intensifier scales it. The result is clamped to `[-1.0, 1.0]` and is
/// `0.0` for empty or unknown text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut sum = 0.0_f64;
        let mut matched = 0_usize;
        let mut modifier = 1.0_f64;

        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            if w.is_empty() {
                continue;
            }
            if is_negator(&w) {
                modifier *= NEGATION_FACTOR;
                continue;
            }
            if let Some(factor) = intensifier(&w) {
                modifier *= factor;
                continue;
            }
            if let Some(weight) = lexicon_weight(&w) {
                sum += (weight * modifier).clamp(-1.0, 1.0);
                matched += 1;
            }
            modifier = 1.0;
        }

        if matched == 0 {
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let denom = matched as f64;
        (sum / denom).clamp(-1.0, 1.0)
    }
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}

fn intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, factor)| factor)
}

fn lexicon_weight(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, weight)| weight)
}
