//! Reduction of a company concept document to its extrema.

use crate::concept::ConceptDocument;
use crate::error::{ExtremaOrderError, ProcessingError};
use crate::filter::{DEFAULT_AFTER, YearFilter};
use crate::fiscal_year::FiscalYear;
use crate::observation::{Observation, ObservationSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Unit read by default.
pub const DEFAULT_UNIT: &str = "shares";

/// What to read from the document and where to cut it off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Key under `units` holding the observation array
    pub unit: String,
    /// Exclusive fiscal-year cutoff
    pub after: FiscalYear,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
            after: DEFAULT_AFTER,
        }
    }
}

/// One end of the range: a value and the fiscal year it was reported for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// Reported value
    pub val: f64,
    /// Fiscal year label
    pub fy: FiscalYear,
}

impl From<&Observation> for Extremum {
    fn from(obs: &Observation) -> Self {
        Self {
            val: obs.value,
            fy: obs.fiscal_year,
        }
    }
}

/// Largest and smallest qualifying observations for one entity.
///
/// Serializes as
/// `{"entityName": ..., "max": {"val": ..., "fy": ...}, "min": {"val": ..., "fy": ...}}`.
/// Deserializing rejects documents whose `max.val` is below `min.val`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawExtrema")]
pub struct ExtremaResult {
    entity_name: String,
    max: Extremum,
    min: Extremum,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExtrema {
    entity_name: String,
    max: Extremum,
    min: Extremum,
}

impl TryFrom<RawExtrema> for ExtremaResult {
    type Error = ExtremaOrderError;

    fn try_from(raw: RawExtrema) -> Result<Self, Self::Error> {
        if raw.max.val < raw.min.val {
            return Err(ExtremaOrderError {
                max: raw.max.val,
                min: raw.min.val,
            });
        }
        Ok(Self {
            entity_name: raw.entity_name,
            max: raw.max,
            min: raw.min,
        })
    }
}

impl ExtremaResult {
    /// Builds the result from a validated series, or `None` if it is empty.
    pub fn from_series(entity_name: impl Into<String>, series: &ObservationSeries) -> Option<Self> {
        let (max, min) = series.extrema()?;
        Some(Self {
            entity_name: entity_name.into(),
            max: max.into(),
            min: min.into(),
        })
    }

    /// Company name as reported.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Largest value (first occurrence on ties).
    pub const fn max(&self) -> &Extremum {
        &self.max
    }

    /// Smallest value (first occurrence on ties).
    pub const fn min(&self) -> &Extremum {
        &self.min
    }
}

/// Parses `json` and reduces the configured series to its extrema.
///
/// # Errors
///
/// Returns [`ProcessingError::Parse`] for malformed JSON and
/// [`ProcessingError::NoQualifyingData`] if no observation survives the
/// fiscal-year filter and value coercion. Observations that are merely
/// unusable are skipped, not reported as errors.
///
/// # Example
///
/// ```
/// use outstanding::{ProcessingError, ReduceOptions, reduce};
///
/// let json = r#"{"entityName": "ACME", "units": {"shares": [{"fy": "2019", "val": "100"}]}}"#;
/// let err = reduce(json, &ReduceOptions::default()).unwrap_err();
/// assert!(matches!(err, ProcessingError::NoQualifyingData { .. }));
/// ```
pub fn reduce(json: &str, options: &ReduceOptions) -> Result<ExtremaResult, ProcessingError> {
    let doc = ConceptDocument::parse(json)?;
    let raw = doc.observations(&options.unit)?;
    let series = ObservationSeries::collect(&raw, &YearFilter::after(options.after));

    let skipped = series.skipped();
    debug!(
        unit = %options.unit,
        after = %options.after,
        total = raw.len(),
        kept = series.len(),
        missing = skipped.missing,
        invalid_year = skipped.invalid_year,
        before_cutoff = skipped.before_cutoff,
        non_numeric = skipped.non_numeric,
        "filtered observation series"
    );

    ExtremaResult::from_series(doc.entity_name(), &series).ok_or_else(|| {
        ProcessingError::NoQualifyingData {
            unit: options.unit.clone(),
            after: options.after,
        }
    })
}
