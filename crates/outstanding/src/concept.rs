//! The parts of a company concept document the reducer reads.
//!
//! ```text
//! { "entityName": "...",
//!   "units": { "shares": [ { "fy": "2021", "val": 1767800000, ... }, ... ] } }
//! ```
//!
//! Everything else in the document is ignored, including series under units
//! other than the one asked for.

use crate::error::ProcessingError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A parsed company concept document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDocument {
    /// Company name
    #[serde(default)]
    entity_name: Option<String>,

    /// Unit name (e.g. "shares", "USD") to raw observation array
    #[serde(default)]
    units: Option<HashMap<String, Value>>,
}

/// One entry of a unit's observation array, before validation.
///
/// Both fields stay untyped: `fy` may be text or a number and `val` may be a
/// number or numeric text. JSON `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawObservation {
    /// Fiscal year label
    #[serde(default)]
    pub fy: Option<Value>,

    /// Reported value
    #[serde(default)]
    pub val: Option<Value>,
}

impl ConceptDocument {
    /// Parses a company concept document.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::Parse`] for malformed JSON or if
    /// `entityName`/`units` have the wrong type.
    pub fn parse(json: &str) -> Result<Self, ProcessingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Company name with surrounding whitespace removed; empty if absent.
    pub fn entity_name(&self) -> &str {
        self.entity_name.as_deref().map_or("", str::trim)
    }

    /// Raw observations reported under `unit`, in document order.
    ///
    /// A missing `units` object, a missing unit, or a `null` array all yield
    /// an empty series.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::Parse`] if the unit's value is not an array
    /// of objects.
    pub fn observations(&self, unit: &str) -> Result<Vec<RawObservation>, ProcessingError> {
        match self.units.as_ref().and_then(|units| units.get(unit)) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(series) => Ok(Vec::<RawObservation>::deserialize(series)?),
        }
    }
}
