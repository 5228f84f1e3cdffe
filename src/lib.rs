// Mashair: lightweight sentiment scoring for Arabic/derja text.
// Lexicon-based keyword scoring at the core, with an optional client for an
// external classifier pipeline producing a competing verdict.
pub mod input;
pub mod sentiment;

pub use input::read_document;
pub use sentiment::{
    default_lexicon, score_sentiment, Lexicon, PipelineClient, Sentiment, SentimentLabel,
};
