//! Compound polarity scoring over a [`Lexicon`].

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::lexicon::Lexicon;

/// Anything that turns one article text into a compound score in `[-1.0, 1.0]`.
pub trait SentimentModel {
    fn compound(&self, text: &str) -> f64;
}

/// VADER scorer borrowing an immutable [`Lexicon`].
pub struct VaderScorer<'a> {
    analyzer: SentimentIntensityAnalyzer<'a>,
}

impl<'a> VaderScorer<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::from_lexicon(lexicon.words()),
        }
    }
}

impl SentimentModel for VaderScorer<'_> {
    /// Returns `0.0` for empty or whitespace-only text.
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}
