//! Export functionality for extrema results.
//!
//! Files are created (or truncated) and written in one go. Writes are not
//! atomic; callers only write once a result exists, so a failed run leaves no
//! output behind.

use outstanding::ExtremaResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// File name written in the working directory when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "data.json";

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format (two-space indent).
    #[default]
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// One CSV row: either end of the range.
#[derive(Debug, Serialize)]
struct ExtremumRow<'a> {
    entity_name: &'a str,
    extremum: &'a str,
    fy: String,
    val: f64,
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for ExtremaResult {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for (extremum, value) in [("max", self.max()), ("min", self.min())] {
                    wtr.serialize(ExtremumRow {
                        entity_name: self.entity_name(),
                        extremum,
                        fy: value.fy.to_string(),
                        val: value.val,
                    })?;
                }
                let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Writes `result` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or file writing fails.
pub fn write_result(path: &Path, result: &ExtremaResult) -> Result<(), ExportError> {
    result.export_to_file(path, ExportFormat::PrettyJson)
}
