// Keyword sentiment scorer: signed tally of lexicon words contained in the
// text, classified by sign and normalized by the fixed list sizes.
//
// Matching is deliberately containment-based, not token-based: a lexicon
// word embedded in a longer word counts, and repeats in the text still
// count once per entry. Tests pin that behavior.
use super::lexicon::{default_lexicon, Lexicon};
use super::types::{Sentiment, SentimentLabel};

/// Score `text` against the built-in Arabic lexicon.
///
/// Pure and total: any string input yields a verdict, never an error.
///
/// ```
/// use mashair::{score_sentiment, SentimentLabel};
///
/// let verdict = score_sentiment("سعيد");
/// assert_eq!(verdict.label, SentimentLabel::Positive);
/// assert_eq!(verdict.score, 0.25);
/// ```
pub fn score_sentiment(text: &str) -> Sentiment {
    default_lexicon().score(text)
}

impl Lexicon {
    /// Score `text` against this lexicon.
    ///
    /// Each positive entry contained in the text adds one to the raw score,
    /// each negative entry subtracts one. A positive raw score yields
    /// `Positive` with magnitude `raw / positive_list_len`, a negative one
    /// yields `Negative` with `-raw / negative_list_len`, both rounded to
    /// two decimals; a zero raw score is exactly `{Neutral, 0.0}`.
    pub fn score(&self, text: &str) -> Sentiment {
        let mut raw: i32 = 0;

        for word in self.positive() {
            if text.contains(word.as_str()) {
                raw += 1;
            }
        }
        for word in self.negative() {
            if text.contains(word.as_str()) {
                raw -= 1;
            }
        }

        // A non-zero raw score implies at least one match on that side, so
        // the list length used as denominator is never zero.
        if raw > 0 {
            Sentiment {
                label: SentimentLabel::Positive,
                score: round2(raw as f32 / self.positive().len() as f32),
            }
        } else if raw < 0 {
            Sentiment {
                label: SentimentLabel::Negative,
                score: round2((-raw) as f32 / self.negative().len() as f32),
            }
        } else {
            Sentiment::neutral()
        }
    }
}

// Two-decimal rounding, half away from zero.
fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}
