use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("feed parse error: {0}")]
    FeedParse(#[from] feed_rs::parser::ParseFeedError),

    #[error("invalid date window: start {start} is after end {end}")]
    InvalidDateWindow { start: NaiveDate, end: NaiveDate },

    #[error("source '{name}' template has no {{query}} placeholder: {template}")]
    InvalidTemplate { name: String, template: String },
}
