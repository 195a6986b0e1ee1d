//! Shared configuration and reference data for PSX Sentinel.
//!
//! Holds the environment-driven [`AppConfig`] and the ticker → company-name
//! [`SymbolMapping`] that every run loads once before fetching news.

mod app_config;
mod config;
mod symbols;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use symbols::{load_symbol_mapping, SymbolMapping};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read symbols file {path}: {source}")]
    SymbolsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse symbols file: {0}")]
    SymbolsFileParse(#[from] csv::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
