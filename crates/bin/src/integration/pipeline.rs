//! Fetch, reduce and write, in that order.
//!
//! The output file is only created after the reduction succeeds, so a failed
//! run never leaves a partial or stale-looking result behind.

use indicatif::ProgressBar;
use outstanding::{ExtremaResult, ProcessingError, ReduceOptions, reduce};
use outstanding_data::edgar::ConceptClient;
use outstanding_data::{EdgarConfig, FetchError};
use outstanding_output::{DEFAULT_OUTPUT_FILE, ExportError, ExportFormat, Exporter};
use std::path::PathBuf;
use tracing::{info, warn};

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PipelineError {
    /// Nothing was fetched.
    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] FetchError),
    /// The document was fetched but could not be reduced.
    #[error("Error processing data: {0}")]
    Processing(#[from] ProcessingError),
    /// The result could not be written.
    #[error("Failed to write output: {0}")]
    Export(#[from] ExportError),
}

/// Configuration for one run.
#[derive(Debug, Clone)]
pub(crate) struct PipelineConfig {
    /// Where and what to fetch.
    pub edgar: EdgarConfig,
    /// Which series to reduce and the fiscal-year cutoff.
    pub reduce: ReduceOptions,
    /// Output file path.
    pub output: PathBuf,
    /// Output file format.
    pub format: ExportFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            edgar: EdgarConfig::default(),
            reduce: ReduceOptions::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: ExportFormat::default(),
        }
    }
}

/// Runs fetch → reduce → write and returns the written result.
pub(crate) async fn run_pipeline(
    config: &PipelineConfig,
    progress: Option<&ProgressBar>,
) -> Result<ExtremaResult, PipelineError> {
    let client = ConceptClient::new(config.edgar.clone())?;

    if let Some(pb) = progress {
        pb.set_message("Fetching company concept...");
    }
    let json = client.fetch().await.inspect_err(|e| {
        warn!(cik = %config.edgar.cik, error = %e, "fetch failed");
    })?;

    if let Some(pb) = progress {
        pb.set_message("Reducing observations...");
    }
    let result = reduce(&json, &config.reduce).inspect_err(|e| {
        warn!(error = %e, "reduction failed");
    })?;

    if let Some(pb) = progress {
        pb.set_message("Writing output...");
    }
    result.export_to_file(&config.output, config.format)?;

    info!(
        path = %config.output.display(),
        entity = result.entity_name(),
        max = result.max().val,
        max_fy = %result.max().fy,
        min = result.min().val,
        min_fy = %result.min().fy,
        "wrote extrema"
    );
    Ok(result)
}
