//! `analyze` and `queries` command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;

use psx_core::AppConfig;
use psx_sentiment::{DateWindow, FetchSettings, Lexicon, NewsFetcher, VaderScorer};

use crate::report;

#[derive(Debug, Clone)]
pub(crate) struct AnalyzeOptions {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub symbols: String,
    pub max_symbols: usize,
    pub mapping_path: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub strict_fallback_dates: bool,
}

/// Split a comma-separated ticker list.
///
/// Uppercases, trims, drops empty items and keeps the first `max` in order.
pub(crate) fn parse_symbols(input: &str, max: usize) -> Vec<String> {
    input
        .to_uppercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(max)
        .map(ToString::to_string)
        .collect()
}

/// Run sentiment analysis for the requested symbols and print the results.
///
/// # Errors
///
/// Returns an error if the symbol list is empty, the date window is inverted,
/// the mapping file cannot be loaded, the HTTP client cannot be built, or the
/// CSV export fails. Per-source fetch failures are logged and counted only.
pub(crate) async fn run_analyze(config: &AppConfig, options: AnalyzeOptions) -> anyhow::Result<()> {
    let symbols = parse_symbols(&options.symbols, options.max_symbols);
    if symbols.is_empty() {
        anyhow::bail!("no symbols given; pass --symbols like \"OGDC,HUBC\"");
    }

    let window = DateWindow::new(options.start, options.end)?;
    let mapping = psx_core::load_symbol_mapping(&options.mapping_path)?;
    tracing::info!(
        path = %options.mapping_path.display(),
        symbols = mapping.len(),
        "loaded symbol mapping"
    );

    let mut settings = FetchSettings::from_app_config(config);
    settings.strict_fallback_dates = options.strict_fallback_dates;
    let fetcher = NewsFetcher::new(settings)?;

    let lexicon = Lexicon::with_domain_weights();
    let scorer = VaderScorer::new(&lexicon);

    let reports = psx_sentiment::run_sentiment(
        &fetcher,
        &scorer,
        &mapping,
        &symbols,
        &window,
        |done, total, symbol_report| {
            tracing::info!(
                symbol = %symbol_report.result.symbol,
                done,
                total,
                "symbol processed"
            );
        },
    )
    .await;

    let results: Vec<_> = reports.iter().map(|r| r.result.clone()).collect();
    print!("{}", report::render_table(&results));

    let total_articles: usize = results.iter().map(|r| r.article_count).sum();
    let failed_sources: usize = reports.iter().map(|r| r.failures.len()).sum();
    if failed_sources > 0 {
        tracing::warn!(failed_sources, "some feeds could not be fetched or parsed");
    }

    if let Some(path) = &options.csv_path {
        report::write_csv(path, &results)
            .with_context(|| format!("failed to write CSV export to {}", path.display()))?;
        println!("wrote {} rows to {}", results.len(), path.display());
    }

    println!(
        "sentiment run complete: {} symbols scored, {} articles, {} feed failures",
        results.len(),
        total_articles,
        failed_sources
    );
    Ok(())
}

/// Print the search queries a symbol expands to.
///
/// # Errors
///
/// Returns an error if the mapping file cannot be loaded.
pub(crate) fn run_queries(mapping_path: &Path, symbol: &str) -> anyhow::Result<()> {
    let mapping = psx_core::load_symbol_mapping(mapping_path)?;
    let symbol = symbol.trim().to_uppercase();
    match mapping.company_name(&symbol) {
        Some(name) => println!("{symbol}: {name}"),
        None => println!("{symbol}: not in mapping; searching by ticker only"),
    }
    for query in psx_sentiment::expand_queries(&symbol, &mapping) {
        println!("  {query}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_symbols_uppercases_and_trims() {
        assert_eq!(
            parse_symbols(" hubc, Engro ,luck", 12),
            vec!["HUBC", "ENGRO", "LUCK"]
        );
    }

    #[test]
    fn parse_symbols_drops_empty_items() {
        assert_eq!(parse_symbols("OGDC,, ,POL,", 12), vec!["OGDC", "POL"]);
    }

    #[test]
    fn parse_symbols_keeps_first_max_in_order() {
        let symbols = parse_symbols(crate::DEFAULT_SYMBOLS, 5);
        assert_eq!(symbols, vec!["HUBC", "ENGRO", "LUCK", "PPL", "PSO"]);
    }

    #[test]
    fn parse_symbols_empty_input() {
        assert!(parse_symbols("", 12).is_empty());
        assert!(parse_symbols(" , ,", 12).is_empty());
    }
}
