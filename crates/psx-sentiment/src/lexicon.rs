//! VADER base lexicon extended with PSX-specific word weights.

use std::collections::HashMap;

use unicase::UniCase;

/// Domain word weights on VADER's intensity scale (roughly `[-4.0, 4.0]`).
///
/// Keys are lowercase single words. These replace any base VADER entry for
/// the same word.
pub const DOMAIN_WEIGHTS: &[(&str, f64)] = &[
    // Corporate actions and results
    ("dividend", 3.4),
    ("bonus", 3.7),
    ("rights", 2.6),
    ("result", 3.0),
    ("profit", 2.4),
    ("earnings", 2.6),
    ("eps", 2.5),
    ("rollover", 2.5),
    ("expiry", 2.1),
    ("expansion", 2.0),
    // Distress and enforcement
    ("loss", -2.5),
    ("default", -3.5),
    ("probe", -3.0),
    ("penalty", -2.8),
    ("shutdown", -2.6),
    ("closure", -2.4),
    ("fire", -2.2),
    ("fraud", -3.2),
    ("scam", -3.0),
];

/// Immutable word → intensity table used by [`crate::VaderScorer`].
///
/// Built once at startup and shared by reference; nothing mutates it after
/// construction. Lookups are case-insensitive, matching VADER's own table.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<UniCase<&'static str>, f64>,
}

impl Lexicon {
    /// VADER's stock lexicon with [`DOMAIN_WEIGHTS`] applied.
    #[must_use]
    pub fn with_domain_weights() -> Self {
        Self::with_overrides(DOMAIN_WEIGHTS)
    }

    /// VADER's stock lexicon with the given overrides applied.
    #[must_use]
    pub fn with_overrides(overrides: &[(&'static str, f64)]) -> Self {
        let mut words = vader_sentiment::LEXICON.clone();
        for &(word, weight) in overrides {
            words.insert(UniCase::new(word), weight);
        }
        Self { words }
    }

    #[must_use]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.words.get(&UniCase::new(word)).copied()
    }

    pub(crate) fn words(&self) -> &HashMap<UniCase<&'static str>, f64> {
        &self.words
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::with_domain_weights()
    }
}
