//! Result table rendering and CSV export.

use std::path::Path;

use serde::Serialize;

use psx_sentiment::SymbolResult;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Symbol")]
    symbol: &'a str,
    #[serde(rename = "Score")]
    score: f64,
    #[serde(rename = "Signal")]
    signal: &'static str,
    #[serde(rename = "Articles")]
    articles: usize,
}

/// Render results as a fixed-width table, scores signed to 3 decimals.
pub(crate) fn render_table(results: &[SymbolResult]) -> String {
    let header = format!("{:<10}{:<10}{:<14}ARTICLES", "SYMBOL", "SCORE", "SIGNAL");
    let rows = results.iter().map(|result| {
        format!(
            "{:<10}{:<+10.3}{:<14}{}",
            result.symbol,
            result.score,
            result.signal.as_str(),
            result.article_count
        )
    });

    std::iter::once(header)
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}

/// Write results to `path` with a `Symbol,Score,Signal,Articles` header.
///
/// # Errors
///
/// Returns a [`csv::Error`] if the file cannot be created or written.
pub(crate) fn write_csv(path: &Path, results: &[SymbolResult]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for result in results {
        writer.serialize(CsvRow {
            symbol: &result.symbol,
            score: result.score,
            signal: result.signal.as_str(),
            articles: result.article_count,
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use psx_sentiment::{aggregate_scores, Signal};

    use super::*;

    fn sample() -> Vec<SymbolResult> {
        vec![
            aggregate_scores("OGDC", &[0.6, 0.2]),
            aggregate_scores("PSO", &[]),
            aggregate_scores("SNGP", &[-0.5, -0.3, -0.2]),
        ]
    }

    #[test]
    fn table_has_header_and_one_line_per_symbol() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("SYMBOL"));
        assert!(lines[0].ends_with("ARTICLES"));
    }

    #[test]
    fn empty_results_render_header_only() {
        assert_eq!(
            render_table(&[]),
            "SYMBOL    SCORE     SIGNAL        ARTICLES\n"
        );
    }

    #[test]
    fn table_formats_signed_scores_and_labels() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[1].starts_with("OGDC"));
        assert!(lines[1].contains("+0.400"));
        assert!(lines[1].contains("STRONG BUY"));
        assert!(lines[1].trim_end().ends_with('2'));
        assert!(lines[2].contains("+0.000"));
        assert!(lines[2].contains(Signal::Hold.as_str()));
        assert!(lines[3].contains("-0.333"));
        assert!(lines[3].contains("SELL"));
    }

    #[test]
    fn csv_export_writes_header_and_rows() {
        let path = std::env::temp_dir().join(format!("psx-export-{}.csv", std::process::id()));
        write_csv(&path, &sample()).expect("csv export should succeed");
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Symbol,Score,Signal,Articles",
                "OGDC,0.4,STRONG BUY,2",
                "PSO,0.0,HOLD,0",
                "SNGP,-0.333,SELL,3",
            ]
        );
    }

    #[test]
    fn csv_export_to_missing_directory_fails() {
        let path = Path::new("/nonexistent/psx/export.csv");
        assert!(write_csv(path, &sample()).is_err());
    }
}
