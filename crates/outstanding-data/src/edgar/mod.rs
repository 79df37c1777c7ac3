//! SEC EDGAR company concept retrieval.
//!
//! The company concept API returns every disclosure of one XBRL concept for
//! one company:
//! `https://data.sec.gov/api/xbrl/companyconcept/CIK{cik_padded}/{taxonomy}/{concept}.json`
//!
//! # Example
//!
//! ```no_run
//! use outstanding_data::{EdgarConfig, edgar::ConceptClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ConceptClient::new(EdgarConfig::default())?;
//!     let json = client.fetch().await?;
//!     println!("Fetched {} bytes", json.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod encoding;

pub use client::ConceptClient;
pub use encoding::{ACCEPT_ENCODING, ContentEncoding};
