//! Per-symbol score aggregation and signal thresholds.

use crate::types::SymbolResult;

const STRONG_THRESHOLD: f64 = 0.40;
const THRESHOLD: f64 = 0.15;

/// Discrete trading signal derived from an aggregate sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Signal {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Signal::StrongBuy => "STRONG BUY",
            Signal::Buy => "BUY",
            Signal::Hold => "HOLD",
            Signal::Sell => "SELL",
            Signal::StrongSell => "STRONG SELL",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score to a signal. Strong thresholds are checked first.
#[must_use]
pub fn classify_score(score: f64) -> Signal {
    if score >= STRONG_THRESHOLD {
        Signal::StrongBuy
    } else if score >= THRESHOLD {
        Signal::Buy
    } else if score <= -STRONG_THRESHOLD {
        Signal::StrongSell
    } else if score <= -THRESHOLD {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Aggregate per-article compound scores for one symbol.
///
/// The score is the mean rounded to 3 decimals; no scores means a neutral
/// `0.0` / [`Signal::Hold`].
#[must_use]
pub fn aggregate_scores(symbol: &str, scores: &[f64]) -> SymbolResult {
    let score = if scores.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let denom = scores.len() as f64;
        round3(scores.iter().sum::<f64>() / denom)
    };

    SymbolResult {
        symbol: symbol.to_string(),
        score,
        signal: classify_score(score),
        article_count: scores.len(),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
