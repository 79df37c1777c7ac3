//! Validated observations and their extrema.

use crate::concept::RawObservation;
use crate::filter::YearFilter;
use crate::fiscal_year::FiscalYear;
use serde_json::Value;
use tracing::trace;

/// One reported value with its fiscal year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Fiscal year the value was reported for
    pub fiscal_year: FiscalYear,
    /// Reported value; always finite
    pub value: f64,
}

/// How many raw observations were skipped, and why.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    /// `fy` or `val` absent or null
    pub missing: usize,
    /// `fy` present but not a four-digit year
    pub invalid_year: usize,
    /// Fiscal year at or before the cutoff
    pub before_cutoff: usize,
    /// `val` could not be read as a finite number
    pub non_numeric: usize,
}

impl SkipCounts {
    /// Total number of skipped observations.
    pub const fn total(&self) -> usize {
        self.missing + self.invalid_year + self.before_cutoff + self.non_numeric
    }
}

/// Observations that passed the year filter and value coercion, in source
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSeries {
    observations: Vec<Observation>,
    skipped: SkipCounts,
}

impl ObservationSeries {
    /// Validates `raw` against `filter`.
    ///
    /// An observation is kept when both `fy` and `val` are present, `fy` is a
    /// four-digit year accepted by the filter, and `val` coerces to a finite
    /// number. Everything else is counted in [`skipped`](Self::skipped) and
    /// otherwise ignored.
    pub fn collect(raw: &[RawObservation], filter: &YearFilter) -> Self {
        let mut observations = Vec::with_capacity(raw.len());
        let mut skipped = SkipCounts::default();

        for (index, entry) in raw.iter().enumerate() {
            let (Some(fy), Some(val)) = (&entry.fy, &entry.val) else {
                trace!(index, "skipping observation without fy or val");
                skipped.missing += 1;
                continue;
            };
            let Some(fiscal_year) = FiscalYear::from_json(fy) else {
                trace!(index, %fy, "skipping observation with invalid fiscal year");
                skipped.invalid_year += 1;
                continue;
            };
            if !filter.accepts(fiscal_year) {
                skipped.before_cutoff += 1;
                continue;
            }
            let Some(value) = coerce_value(val) else {
                trace!(index, %val, "skipping non-numeric observation");
                skipped.non_numeric += 1;
                continue;
            };
            observations.push(Observation { fiscal_year, value });
        }

        Self {
            observations,
            skipped,
        }
    }

    /// Kept observations.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Skipped observation counts.
    pub const fn skipped(&self) -> SkipCounts {
        self.skipped
    }

    /// Number of kept observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if nothing was kept.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the `(max, min)` observations, or `None` if the series is empty.
    ///
    /// Ties go to the first occurrence in source order, for both ends.
    pub fn extrema(&self) -> Option<(&Observation, &Observation)> {
        let (first, rest) = self.observations.split_first()?;
        Some(rest.iter().fold((first, first), |(max, min), obs| {
            (
                if obs.value > max.value { obs } else { max },
                if obs.value < min.value { obs } else { min },
            )
        }))
    }
}

/// Reads a `val` as a finite `f64`.
///
/// Numbers are taken as-is; strings are trimmed and parsed. Non-finite
/// results and every other JSON type, booleans included, yield `None`.
pub fn coerce_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
