//! Word-cloud boundary: title joining, term counting, and rendering.
//!
//! Layout quality is not a concern of this crate. [`SvgWordCloud`] is a
//! plain row-packing renderer so the view has something to display; any
//! other [`WordCloudRenderer`] can be swapped in.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 300;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 300;
/// Canvas fill.
pub const BACKGROUND_COLOR: &str = "white";
/// Most terms kept for a cloud.
pub const MAX_WORDS: usize = 200;

const MIN_FONT_PX: f64 = 8.0;
const MAX_FONT_PX: f64 = 48.0;
const PADDING_PX: f64 = 4.0;
const PALETTE: &[&str] = &["#1f3b73", "#2e6f95", "#3a8f6b", "#7a4e9c", "#b0563a"];

/// Words of two or more characters, apostrophes allowed after the first.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("valid token regex"));

const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "against", "all", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "it's", "its", "just", "me", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "says", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "us", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

/// Joins titles with single spaces, in the order given.
pub fn join_titles<'a, I>(titles: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    titles.into_iter().collect::<Vec<_>>().join(" ")
}

/// One counted term and its size relative to the most frequent term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
    /// `count / max_count`, in `(0.0, 1.0]`.
    pub weight: f64,
}

/// Count terms in `text` for the cloud.
///
/// Tokens are lowercased and stopwords dropped. Results are sorted by
/// count descending, then term ascending, and truncated to [`MAX_WORDS`].
#[must_use]
pub fn term_frequencies(text: &str) -> Vec<TermFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for m in TOKEN_RE.find_iter(text) {
        let term = m.as_str().to_lowercase();
        if STOPWORDS.contains(&term.as_str()) {
            continue;
        }
        *counts.entry(term).or_insert(0) += 1;
    }

    let mut terms: Vec<(String, usize)> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(MAX_WORDS);

    let max_count = terms.first().map_or(1, |(_, c)| *c);
    terms
        .into_iter()
        .map(|(term, count)| {
            #[allow(clippy::cast_precision_loss)]
            let weight = count as f64 / max_count as f64;
            TermFrequency {
                term,
                count,
                weight,
            }
        })
        .collect()
}

/// A rendered image, opaque to everything but the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// MIME type of `bytes`, e.g. `image/svg+xml`.
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Lays out and rasterizes a joined title string.
pub trait WordCloudRenderer {
    fn render(&self, text: &str) -> Raster;
}

/// Row-packed SVG word cloud on a fixed 300×300 white canvas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgWordCloud;

impl WordCloudRenderer for SvgWordCloud {
    fn render(&self, text: &str) -> Raster {
        let width = f64::from(CANVAS_WIDTH);
        let height = f64::from(CANVAS_HEIGHT);

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}"><rect width="100%" height="100%" fill="{BACKGROUND_COLOR}"/>"#
        );

        let mut x = PADDING_PX;
        let mut baseline = PADDING_PX;
        let mut row_height = 0.0_f64;

        for (i, tf) in term_frequencies(text).iter().enumerate() {
            let font = MIN_FONT_PX + (MAX_FONT_PX - MIN_FONT_PX) * tf.weight;
            #[allow(clippy::cast_precision_loss)]
            let advance = font * 0.6 * tf.term.chars().count() as f64;

            if x + advance > width - PADDING_PX && x > PADDING_PX {
                x = PADDING_PX;
                baseline += row_height + PADDING_PX;
                row_height = 0.0;
            }
            if row_height == 0.0 {
                row_height = font;
            }
            if baseline + row_height > height - PADDING_PX {
                break;
            }

            svg.push_str(&format!(
                r#"<text x="{x:.1}" y="{:.1}" font-size="{font:.1}" font-family="sans-serif" fill="{}">{}</text>"#,
                baseline + row_height,
                PALETTE[i % PALETTE.len()],
                escape_xml(&tf.term)
            ));

            x += advance + PADDING_PX;
        }

        svg.push_str("</svg>");

        Raster {
            media_type: "image/svg+xml",
            bytes: svg.into_bytes(),
        }
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
