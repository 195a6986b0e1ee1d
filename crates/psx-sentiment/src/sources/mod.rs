//! News sources and the sequential feed fetcher.

mod feed;

use std::collections::BTreeSet;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use psx_core::AppConfig;

use crate::error::SentimentError;
use crate::types::{Collection, DateWindow, SourceFailure};

const QUERY_PLACEHOLDER: &str = "{query}";

/// Keyword appended to the aggregator search to keep results on the exchange.
pub const FALLBACK_KEYWORD: &str = "PSX";

/// A search feed reachable by substituting a query into a URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    name: String,
    template: String,
}

impl FeedSource {
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidTemplate`] if `template` has no
    /// `{query}` placeholder.
    pub fn new(name: &str, template: &str) -> Result<Self, SentimentError> {
        if !template.contains(QUERY_PLACEHOLDER) {
            return Err(SentimentError::InvalidTemplate {
                name: name.to_string(),
                template: template.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            template: template.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Percent-encode `query` and substitute it into the template.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        self.template.replace(QUERY_PLACEHOLDER, &encoded)
    }
}

/// Site-search feeds queried once per search term.
#[must_use]
pub fn default_sources() -> Vec<FeedSource> {
    vec![
        FeedSource {
            name: "propakistani".to_string(),
            template: "https://propakistani.pk/feed/?s={query}".to_string(),
        },
        FeedSource {
            name: "profit".to_string(),
            template: "https://profit.pakistantoday.com.pk/feed/?s={query}".to_string(),
        },
        FeedSource {
            name: "brecorder".to_string(),
            template: "https://www.brecorder.com/index.php?search={query}".to_string(),
        },
    ]
}

/// Aggregator feed queried once per ticker.
#[must_use]
pub fn default_aggregator() -> FeedSource {
    FeedSource {
        name: "google_news".to_string(),
        template: "https://news.google.com/rss/search?q={query}&hl=en-PK".to_string(),
    }
}

/// Everything [`NewsFetcher`] needs to know.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_entries_per_feed: usize,
    pub inter_query_delay_ms: u64,
    pub sources: Vec<FeedSource>,
    pub aggregator: FeedSource,
    /// Apply the date window to aggregator entries as well.
    pub strict_fallback_dates: bool,
}

impl FetchSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            request_timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            max_entries_per_feed: config.max_entries_per_feed,
            inter_query_delay_ms: config.inter_query_delay_ms,
            sources: default_sources(),
            aggregator: default_aggregator(),
            strict_fallback_dates: false,
        }
    }
}

/// Fetches search feeds one request at a time.
///
/// Fetch and parse failures never abort collection: each one becomes a
/// [`SourceFailure`] in the returned [`Collection`] and is logged at `warn`.
pub struct NewsFetcher {
    client: Client,
    settings: FetchSettings,
}

impl NewsFetcher {
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(settings: FetchSettings) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self { client, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Collect in-window article texts for one query from every fixed source.
    ///
    /// Sources are fetched in order; the inter-query delay is applied once
    /// all of them have been tried.
    pub async fn collect_query(&self, query: &str, window: &DateWindow) -> Collection {
        let mut collection = Collection::default();

        for source in &self.settings.sources {
            let url = source.search_url(query);
            match self.fetch_entries(&url).await {
                Ok(entries) => {
                    let texts = feed::texts_within(&entries, window);
                    tracing::debug!(
                        source = source.name(),
                        query,
                        entries = entries.len(),
                        kept = texts.len(),
                        "fetched source feed"
                    );
                    collection.texts.extend(texts);
                }
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        query,
                        error = %e,
                        "source feed fetch failed"
                    );
                    collection.failures.push(SourceFailure {
                        source: source.name().to_string(),
                        query: query.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if self.settings.inter_query_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.inter_query_delay_ms)).await;
        }

        collection
    }

    /// Collect article texts from the aggregator for all of a ticker's queries.
    ///
    /// Issues one request whose search expression ORs every quoted query,
    /// appends [`FALLBACK_KEYWORD`] and the window as `after:`/`before:`
    /// operators. Entries are not date-filtered unless
    /// [`FetchSettings::strict_fallback_dates`] is set.
    pub async fn collect_fallback(
        &self,
        queries: &BTreeSet<String>,
        window: &DateWindow,
    ) -> Collection {
        let aggregator = &self.settings.aggregator;
        let expression = fallback_expression(queries, window);
        let url = aggregator.search_url(&expression);
        let mut collection = Collection::default();

        match self.fetch_entries(&url).await {
            Ok(entries) => {
                let texts = if self.settings.strict_fallback_dates {
                    feed::texts_within(&entries, window)
                } else {
                    feed::all_texts(&entries)
                };
                tracing::debug!(
                    source = aggregator.name(),
                    entries = entries.len(),
                    kept = texts.len(),
                    "fetched aggregator feed"
                );
                collection.texts = texts;
            }
            Err(e) => {
                tracing::warn!(
                    source = aggregator.name(),
                    query = %expression,
                    error = %e,
                    "aggregator feed fetch failed"
                );
                collection.failures.push(SourceFailure {
                    source: aggregator.name().to_string(),
                    query: expression,
                    reason: e.to_string(),
                });
            }
        }

        collection
    }

    async fn fetch_entries(&self, url: &str) -> Result<Vec<feed::FeedEntry>, SentimentError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.bytes().await?;
        feed::parse_feed(&body, self.settings.max_entries_per_feed)
    }
}

/// `("A" OR "B") PSX after:YYYY-MM-DD before:YYYY-MM-DD`
fn fallback_expression(queries: &BTreeSet<String>, window: &DateWindow) -> String {
    let terms = queries
        .iter()
        .map(|q| format!("\"{q}\""))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!(
        "({terms}) {FALLBACK_KEYWORD} after:{} before:{}",
        window.start(),
        window.end()
    )
}
