#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod concept;
pub mod error;
pub mod extrema;
pub mod filter;
pub mod fiscal_year;
pub mod observation;

pub use concept::{ConceptDocument, RawObservation};
pub use error::{ExtremaOrderError, FiscalYearError, ProcessingError};
pub use extrema::{ExtremaResult, Extremum, ReduceOptions, reduce};
pub use filter::YearFilter;
pub use fiscal_year::FiscalYear;
pub use observation::{Observation, ObservationSeries, SkipCounts};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
