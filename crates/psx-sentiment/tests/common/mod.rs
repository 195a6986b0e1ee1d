//! Shared fixtures for the wiremock-backed fetcher and pipeline tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use wiremock::MockServer;

use psx_sentiment::{DateWindow, FeedSource, FetchSettings, NewsFetcher};

pub const EMPTY_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Search</title><link>https://example.com</link><description>none</description></channel></rss>"#;

/// Render one RSS 2.0 `<item>`; `pub_date` is an RFC 2822 timestamp.
pub fn rss_item(title: &str, description: &str, pub_date: Option<&str>) -> String {
    let pub_date = pub_date
        .map(|d| format!("<pubDate>{d}</pubDate>"))
        .unwrap_or_default();
    format!(
        "<item><title>{title}</title><link>https://example.com/{}</link><description>{description}</description>{pub_date}</item>",
        title.len()
    )
}

pub fn rss_feed(items: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>Search</title><link>https://example.com</link><description>results</description>{}</channel></rss>"#,
        items.concat()
    )
}

pub fn window(start: &str, end: &str) -> DateWindow {
    DateWindow::new(
        NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
        NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
    )
    .unwrap()
}

/// Settings pointing every source at `server`: `/propakistani`, `/profit`,
/// `/brecorder` and `/rss/search` for the aggregator. No delay between queries.
pub fn test_settings(server: &MockServer) -> FetchSettings {
    let base = server.uri();
    FetchSettings {
        request_timeout_secs: 5,
        user_agent: "psx-sentinel-test/0.1".to_string(),
        max_entries_per_feed: 10,
        inter_query_delay_ms: 0,
        sources: vec![
            FeedSource::new("propakistani", &format!("{base}/propakistani/feed/?s={{query}}"))
                .unwrap(),
            FeedSource::new("profit", &format!("{base}/profit/feed/?s={{query}}")).unwrap(),
            FeedSource::new("brecorder", &format!("{base}/brecorder/index.php?search={{query}}"))
                .unwrap(),
        ],
        aggregator: FeedSource::new(
            "google_news",
            &format!("{base}/rss/search?q={{query}}&hl=en-PK"),
        )
        .unwrap(),
        strict_fallback_dates: false,
    }
}

pub fn test_fetcher(server: &MockServer) -> NewsFetcher {
    NewsFetcher::new(test_settings(server)).expect("failed to build test NewsFetcher")
}
