//! Sentiment pipeline orchestration.

use psx_core::SymbolMapping;

use crate::queries::expand_queries;
use crate::scorer::SentimentModel;
use crate::signal::aggregate_scores;
use crate::sources::NewsFetcher;
use crate::types::{Collection, DateWindow, SymbolReport};

/// Run the full sentiment pipeline for one ticker.
///
/// 1. Expand the ticker into its search queries.
/// 2. For each query, fetch every fixed source (date-filtered).
/// 3. Fetch the aggregator once for the whole query set.
/// 4. Score every collected text and aggregate into a [`crate::SymbolResult`].
///
/// Source failures are carried in the report; nothing here is fatal. An
/// empty collection yields a neutral `0.0` / HOLD result.
pub async fn run_symbol_sentiment<M>(
    fetcher: &NewsFetcher,
    model: &M,
    mapping: &SymbolMapping,
    symbol: &str,
    window: &DateWindow,
) -> SymbolReport
where
    M: SentimentModel + ?Sized,
{
    let queries = expand_queries(symbol, mapping);
    tracing::debug!(symbol, queries = ?queries, "expanded search queries");

    let mut collection = Collection::default();
    for query in &queries {
        collection.merge(fetcher.collect_query(query, window).await);
    }
    collection.merge(fetcher.collect_fallback(&queries, window).await);

    if collection.texts.is_empty() {
        tracing::info!(symbol, "no articles collected; returning neutral score");
    }

    let scores: Vec<f64> = collection
        .texts
        .iter()
        .map(|text| model.compound(text))
        .collect();
    let result = aggregate_scores(symbol, &scores);

    tracing::info!(
        symbol,
        score = result.score,
        signal = %result.signal,
        articles = result.article_count,
        failed_sources = collection.failures.len(),
        "symbol scored"
    );

    SymbolReport {
        result,
        failures: collection.failures,
    }
}

/// Run the pipeline for every ticker, strictly in the given order.
///
/// `on_progress` is called after each ticker with `(done, total, report)`.
pub async fn run_sentiment<M, F>(
    fetcher: &NewsFetcher,
    model: &M,
    mapping: &SymbolMapping,
    symbols: &[String],
    window: &DateWindow,
    mut on_progress: F,
) -> Vec<SymbolReport>
where
    M: SentimentModel + ?Sized,
    F: FnMut(usize, usize, &SymbolReport),
{
    let total = symbols.len();
    let mut reports = Vec::with_capacity(total);

    for (i, symbol) in symbols.iter().enumerate() {
        let report = run_symbol_sentiment(fetcher, model, mapping, symbol, window).await;
        on_progress(i + 1, total, &report);
        reports.push(report);
    }

    reports
}
