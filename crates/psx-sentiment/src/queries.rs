//! Ticker → search-term expansion.

use std::collections::BTreeSet;

use psx_core::SymbolMapping;

/// Expand a ticker into its set of search queries.
///
/// Always contains the ticker. When the mapping knows the ticker, the full
/// company name is added, and so is the name's first word if it is longer
/// than two characters. Duplicates collapse; callers must not rely on order.
#[must_use]
pub fn expand_queries(symbol: &str, mapping: &SymbolMapping) -> BTreeSet<String> {
    let mut queries = BTreeSet::new();
    queries.insert(symbol.to_string());

    if let Some(full_name) = mapping.company_name(symbol) {
        queries.insert(full_name.to_string());
        if let Some(first) = full_name.split_whitespace().next() {
            if first.chars().count() > 2 {
                queries.insert(first.to_string());
            }
        }
    }

    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> SymbolMapping {
        SymbolMapping::from_pairs([
            ("OGDC", "Oil and Gas Development Company"),
            ("PPL", "PPL Pakistan Petroleum Limited"),
            ("EFERT", "Engro Fertilizers"),
            ("FFC", "FF Company"),
            ("LUCK", "Lucky"),
        ])
    }

    #[test]
    fn unmapped_symbol_yields_only_itself() {
        let queries = expand_queries("XYZ", &mapping());
        assert_eq!(queries.len(), 1);
        assert!(queries.contains("XYZ"));
    }

    #[test]
    fn mapped_symbol_adds_full_name_and_first_word() {
        let queries = expand_queries("OGDC", &mapping());
        let expected: BTreeSet<String> = [
            "OGDC",
            "Oil and Gas Development Company",
            "Oil",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(queries, expected);
    }

    #[test]
    fn first_word_equal_to_symbol_is_deduplicated() {
        let queries = expand_queries("PPL", &mapping());
        assert_eq!(queries.len(), 2);
        assert!(queries.contains("PPL"));
        assert!(queries.contains("PPL Pakistan Petroleum Limited"));
    }

    #[test]
    fn short_first_word_is_skipped() {
        let queries = expand_queries("FFC", &mapping());
        assert_eq!(queries.len(), 2);
        assert!(!queries.contains("FF"));
    }

    #[test]
    fn single_word_name_collapses_with_first_word() {
        let queries = expand_queries("LUCK", &mapping());
        assert_eq!(queries.len(), 2);
        assert!(queries.contains("Lucky"));
    }

    #[test]
    fn queries_are_never_empty_strings() {
        for symbol in ["OGDC", "PPL", "EFERT", "FFC", "LUCK", "XYZ"] {
            let queries = expand_queries(symbol, &mapping());
            assert!((1..=3).contains(&queries.len()));
            assert!(queries.iter().all(|q| !q.is_empty()));
        }
    }
}
