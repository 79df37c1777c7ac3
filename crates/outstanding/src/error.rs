//! Error types for reduction.

use crate::fiscal_year::FiscalYear;
use thiserror::Error;

/// Errors raised while reducing a company concept document.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Body is not JSON, or a field that is read has the wrong shape
    #[error("Failed to parse company concept JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Nothing survived the fiscal-year filter and value coercion
    #[error("no qualifying data: no {unit} observations found for fiscal years after {after}")]
    NoQualifyingData {
        /// Unit whose series was read
        unit: String,
        /// Exclusive fiscal-year cutoff
        after: FiscalYear,
    },
}

/// Extrema whose maximum is below their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Invalid extrema: max {max} is below min {min}")]
pub struct ExtremaOrderError {
    /// Value given as the maximum
    pub max: f64,
    /// Value given as the minimum
    pub min: f64,
}

/// A fiscal-year label that is not a four-digit year.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid fiscal year {0:?}: expected four ASCII digits")]
pub struct FiscalYearError(pub String);
