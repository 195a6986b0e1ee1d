use chrono::NaiveDate;

use crate::error::SentimentError;
use crate::signal::Signal;

/// Closed calendar-date range `[start, end]` used to filter articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidDateWindow`] when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SentimentError> {
        if start > end {
            return Err(SentimentError::InvalidDateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Aggregated sentiment for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolResult {
    pub symbol: String,
    /// Mean compound score rounded to 3 decimals. 0.0 when no articles.
    pub score: f64,
    pub signal: Signal,
    /// Number of article texts scored.
    pub article_count: usize,
}

/// A feed that could not be fetched or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source: String,
    pub query: String,
    pub reason: String,
}

/// Article texts gathered from one or more feeds, plus the feeds that failed.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub texts: Vec<String>,
    pub failures: Vec<SourceFailure>,
}

impl Collection {
    pub fn merge(&mut self, other: Collection) {
        self.texts.extend(other.texts);
        self.failures.extend(other.failures);
    }
}

/// Pipeline output for one ticker.
#[derive(Debug, Clone)]
pub struct SymbolReport {
    pub result: SymbolResult,
    pub failures: Vec<SourceFailure>,
}
