// Sentiment scoring for short Arabic/derja texts: a pure keyword scorer over
// a fixed lexicon, plus a client for an external classifier pipeline.
pub mod lexicon;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use lexicon::{default_lexicon, Lexicon, NEGATIVE_WORDS, POSITIVE_WORDS};
pub use pipeline::PipelineClient;
pub use scorer::score_sentiment;
pub use types::{Sentiment, SentimentLabel};
