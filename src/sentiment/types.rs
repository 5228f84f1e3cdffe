// Sentiment result types shared by the keyword scorer and the pipeline client.
// The JSON shape {"label": "...", "score": ...} matches what the external
// classifier prints, so the same struct parses both sides.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width specifiers working in column output
        f.pad(self.as_str())
    }
}

/// A sentiment verdict: label plus magnitude.
///
/// Keyword-scored values keep `score` in `[0.0, 1.0]`, rounded to two
/// decimals. Pipeline-scored values carry the external model's score as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f32,
}

impl Sentiment {
    /// The fallback verdict: `Neutral` with a zero score.
    pub fn neutral() -> Self {
        Sentiment {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}
