#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;

pub use export::{DEFAULT_OUTPUT_FILE, ExportError, ExportFormat, Exporter, write_result};
