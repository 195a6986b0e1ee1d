mod analyze;
mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_SYMBOLS: &str = "HUBC,ENGRO,LUCK,PPL,PSO,FFC,EFERT,OGDC,POL,SNGP";

#[derive(Debug, Parser)]
#[command(name = "psx-cli")]
#[command(about = "PSX Sentinel: news sentiment signals for Pakistan Stock Exchange symbols")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch news, score sentiment and print a signal per symbol
    Analyze {
        /// First publish date to include (YYYY-MM-DD)
        #[arg(long, default_value = "2024-01-01")]
        start: NaiveDate,

        /// Last publish date to include (YYYY-MM-DD); defaults to today
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Comma-separated ticker symbols
        #[arg(long, default_value = DEFAULT_SYMBOLS)]
        symbols: String,

        /// Maximum number of symbols to process
        #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(5..=20))]
        max_symbols: u8,

        /// Symbol → company name CSV; overrides PSX_SYMBOLS_PATH
        #[arg(long)]
        mapping: Option<PathBuf>,

        /// Also write the results table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Apply the date window to aggregator results too
        #[arg(long)]
        strict_fallback_dates: bool,
    },
    /// Show the search queries a symbol expands to
    Queries {
        /// Ticker symbol, e.g. OGDC
        symbol: String,

        /// Symbol → company name CSV; overrides PSX_SYMBOLS_PATH
        #[arg(long)]
        mapping: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = psx_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            start,
            end,
            symbols,
            max_symbols,
            mapping,
            csv,
            strict_fallback_dates,
        }) => {
            let options = analyze::AnalyzeOptions {
                start,
                end: end.unwrap_or_else(|| chrono::Local::now().date_naive()),
                symbols,
                max_symbols: usize::from(max_symbols),
                mapping_path: mapping.unwrap_or_else(|| config.symbols_path.clone()),
                csv_path: csv,
                strict_fallback_dates,
            };
            analyze::run_analyze(&config, options).await?;
        }
        Some(Commands::Queries { symbol, mapping }) => {
            let path = mapping.unwrap_or_else(|| config.symbols_path.clone());
            analyze::run_queries(&path, &symbol)?;
        }
        None => println!("psx-cli: run `psx-cli analyze` or `psx-cli --help`"),
    }

    Ok(())
}
