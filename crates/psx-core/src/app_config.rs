use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub symbols_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub inter_query_delay_ms: u64,
    pub max_entries_per_feed: usize,
}
