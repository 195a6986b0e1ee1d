//! News sentiment pipeline for PSX Sentinel.
//!
//! Expands each ticker into search queries, collects article text from
//! site-search RSS feeds plus a Google News fallback, scores every text with
//! VADER over a finance-tuned lexicon, and maps the per-symbol mean score to
//! a trading [`Signal`].

pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod queries;
pub mod scorer;
pub mod signal;
pub mod sources;
pub mod types;

pub use error::SentimentError;
pub use lexicon::{Lexicon, DOMAIN_WEIGHTS};
pub use pipeline::{run_sentiment, run_symbol_sentiment};
pub use queries::expand_queries;
pub use scorer::{SentimentModel, VaderScorer};
pub use signal::{aggregate_scores, classify_score, Signal};
pub use sources::{FeedSource, FetchSettings, NewsFetcher};
pub use types::{Collection, DateWindow, SourceFailure, SymbolReport, SymbolResult};
