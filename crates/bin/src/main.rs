//! Outstanding CLI binary.
//!
//! Fetches one company concept from SEC EDGAR, keeps the fiscal years after a
//! cutoff, and writes the largest and smallest reported values to a file.

mod integration;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use integration::pipeline::{PipelineConfig, PipelineError, run_pipeline};
use outstanding::{FiscalYear, ReduceOptions};
use outstanding_data::EdgarConfig;
use outstanding_data::config::{
    DEFAULT_CIK, DEFAULT_CONCEPT, DEFAULT_TAXONOMY, DEFAULT_USER_AGENT, EDGAR_BASE_URL,
};
use outstanding_output::{DEFAULT_OUTPUT_FILE, ExportFormat};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "outstanding")]
#[command(about = "Outstanding: shares-outstanding extrema from SEC EDGAR", long_about = None)]
#[command(version)]
struct Cli {
    /// Central Index Key of the reporting entity
    #[arg(long, default_value = DEFAULT_CIK)]
    cik: String,

    /// XBRL taxonomy
    #[arg(long, default_value = DEFAULT_TAXONOMY)]
    taxonomy: String,

    /// XBRL concept name
    #[arg(long, default_value = DEFAULT_CONCEPT)]
    concept: String,

    /// Unit whose observations are reduced
    #[arg(long, default_value = outstanding::extrema::DEFAULT_UNIT)]
    unit: String,

    /// Keep fiscal years strictly after this four-digit year
    #[arg(long, default_value = "2020")]
    after: FiscalYear,

    /// User-Agent sent to the SEC: "<app>/<version> (<contact>) <description>"
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// API base URL
    #[arg(long, default_value = EDGAR_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (client default if unset)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Output file
    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::PrettyJson)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    PrettyJson,
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Self::Json,
            Format::PrettyJson => Self::PrettyJson,
            Format::Csv => Self::Csv,
        }
    }
}

impl Cli {
    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            edgar: EdgarConfig {
                base_url: self.base_url,
                cik: self.cik,
                taxonomy: self.taxonomy,
                concept: self.concept,
                user_agent: self.user_agent,
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
            reduce: ReduceOptions {
                unit: self.unit,
                after: self.after,
            },
            output: self.output,
            format: self.format.into(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), PipelineError> {
    let config = cli.into_config();

    println!("Fetching data for CIK {} from SEC API...", config.edgar.cik);

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = run_pipeline(&config, Some(&pb)).await;
    pb.finish_and_clear();
    let result = result?;

    println!(
        "Processed data saved to {}. Entity Name: {}",
        config.output.display(),
        result.entity_name()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_fixed_run() {
        let config = Cli::parse_from(["outstanding"]).into_config();
        assert_eq!(config.edgar, EdgarConfig::default());
        assert_eq!(config.reduce, ReduceOptions::default());
        assert_eq!(config.output, PathBuf::from("data.json"));
        assert_eq!(config.format, ExportFormat::PrettyJson);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Cli::parse_from([
            "outstanding",
            "--cik",
            "320193",
            "--taxonomy",
            "us-gaap",
            "--concept",
            "CommonStockSharesOutstanding",
            "--after",
            "2018",
            "--timeout-secs",
            "30",
            "-o",
            "apple.csv",
            "--format",
            "csv",
        ])
        .into_config();

        assert_eq!(
            config.edgar.concept_url().unwrap(),
            "https://data.sec.gov/api/xbrl/companyconcept/CIK0000320193/us-gaap/CommonStockSharesOutstanding.json"
        );
        assert_eq!(config.edgar.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.reduce.after.to_string(), "2018");
        assert_eq!(config.output, PathBuf::from("apple.csv"));
        assert_eq!(config.format, ExportFormat::Csv);
    }

    #[test]
    fn test_cli_rejects_bad_year() {
        assert!(Cli::try_parse_from(["outstanding", "--after", "20"]).is_err());
    }
}
