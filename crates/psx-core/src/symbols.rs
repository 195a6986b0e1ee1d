use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::ConfigError;

/// Ticker symbol → full company name, loaded once per session.
///
/// Keys are stored trimmed and uppercased; names are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMapping {
    names: HashMap<String, String>,
}

impl SymbolMapping {
    /// Build a mapping from `(symbol, company name)` pairs.
    ///
    /// Pairs with an empty symbol or name are skipped. Later pairs overwrite
    /// earlier ones for the same symbol.
    pub fn from_pairs<I, S, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        S: AsRef<str>,
        N: AsRef<str>,
    {
        let mut names = HashMap::new();
        for (symbol, name) in pairs {
            let symbol = symbol.as_ref().trim().to_uppercase();
            let name = name.as_ref().trim();
            if symbol.is_empty() || name.is_empty() {
                continue;
            }
            names.insert(symbol, name.to_string());
        }
        Self { names }
    }

    /// Parse a two-column CSV table (header row, then `symbol,company name`).
    ///
    /// Columns beyond the second are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SymbolsFileParse`] on malformed CSV.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut pairs = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            if let (Some(symbol), Some(name)) = (record.get(0), record.get(1)) {
                pairs.push((symbol.to_string(), name.to_string()));
            }
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Company name for `symbol`, matched case-insensitively.
    #[must_use]
    pub fn company_name(&self, symbol: &str) -> Option<&str> {
        self.names
            .get(&symbol.trim().to_uppercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Load and validate the symbol mapping from a CSV file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or has no usable rows.
pub fn load_symbol_mapping(path: &Path) -> Result<SymbolMapping, ConfigError> {
    let file = std::fs::File::open(path).map_err(|e| ConfigError::SymbolsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let mapping = SymbolMapping::from_csv_reader(file)?;
    if mapping.is_empty() {
        return Err(ConfigError::Validation(format!(
            "symbols file {} contains no symbol/company rows",
            path.display()
        )));
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Symbol,Company Name
OGDC,Oil and Gas Development Company
 hubc , The Hub Power Company Limited 
PSO,Pakistan State Oil
";

    #[test]
    fn parses_rows_and_skips_header() {
        let mapping = SymbolMapping::from_csv_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(
            mapping.company_name("OGDC"),
            Some("Oil and Gas Development Company")
        );
        assert_eq!(mapping.company_name("Symbol"), None);
    }

    #[test]
    fn symbols_are_trimmed_and_uppercased() {
        let mapping = SymbolMapping::from_csv_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(
            mapping.company_name("HUBC"),
            Some("The Hub Power Company Limited")
        );
        assert_eq!(
            mapping.company_name("hubc"),
            Some("The Hub Power Company Limited")
        );
    }

    #[test]
    fn rows_with_missing_columns_are_skipped() {
        let csv = "Symbol,Company\nLUCK\nENGRO,,\nFFC,Fauji Fertilizer Company\n";
        let mapping = SymbolMapping::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.company_name("LUCK"), None);
        assert_eq!(mapping.company_name("ENGRO"), None);
    }

    #[test]
    fn later_rows_overwrite_earlier_ones() {
        let mapping = SymbolMapping::from_pairs([("POL", "Pakistan Oilfields"), ("pol", "POL Ltd")]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.company_name("POL"), Some("POL Ltd"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_symbol_mapping(Path::new("/nonexistent/psx/symbols.csv")).unwrap_err();
        assert!(matches!(err, ConfigError::SymbolsFileIo { .. }));
        assert!(err.to_string().contains("/nonexistent/psx/symbols.csv"));
    }

    #[test]
    fn load_header_only_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("psx-symbols-{}.csv", std::process::id()));
        std::fs::write(&path, "Symbol,Company Name\n").unwrap();
        let result = load_symbol_mapping(&path);
        std::fs::remove_file(&path).ok();
        assert!(
            matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("no symbol")),
            "expected Validation error, got: {result:?}"
        );
    }
}
