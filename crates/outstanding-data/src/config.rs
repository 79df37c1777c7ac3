//! Request configuration for the EDGAR company concept endpoint.

use reqwest::header::HeaderValue;
use std::time::Duration;
use thiserror::Error;

/// SEC EDGAR API base URL
pub const EDGAR_BASE_URL: &str = "https://data.sec.gov";

/// Default CIK (AbbVie Inc.)
pub const DEFAULT_CIK: &str = "0001551152";

/// Default taxonomy
pub const DEFAULT_TAXONOMY: &str = "dei";

/// Default concept: common stock shares outstanding, as reported on the cover page
pub const DEFAULT_CONCEPT: &str = "EntityCommonStockSharesOutstanding";

/// User agent for SEC EDGAR requests (SEC requires identifying information)
pub const DEFAULT_USER_AGENT: &str =
    "MyApp/1.0 (example@example.com) AbbVieSharesOutstandingFetcher";

/// Maximum number of digits in a CIK
const CIK_WIDTH: usize = 10;

/// Errors found while validating an [`EdgarConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// CIK is empty, non-numeric, or longer than ten digits
    #[error("Invalid CIK {0:?}: expected 1 to 10 decimal digits")]
    InvalidCik(String),

    /// A required field is empty
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// User agent cannot be sent as an HTTP header
    #[error("User agent {0:?} is not a valid header value")]
    InvalidUserAgent(String),
}

/// Everything needed to address one company concept document.
///
/// The defaults reproduce the fixed run: AbbVie's
/// `dei/EntityCommonStockSharesOutstanding` series from `data.sec.gov`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgarConfig {
    /// Scheme and host, without a trailing slash (e.g. `https://data.sec.gov`)
    pub base_url: String,
    /// Central Index Key, padded or unpadded
    pub cik: String,
    /// XBRL taxonomy (e.g. `dei`, `us-gaap`)
    pub taxonomy: String,
    /// Concept name within the taxonomy
    pub concept: String,
    /// `User-Agent` header; the SEC expects `<app>/<version> (<contact>) <description>`
    pub user_agent: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            base_url: EDGAR_BASE_URL.to_string(),
            cik: DEFAULT_CIK.to_string(),
            taxonomy: DEFAULT_TAXONOMY.to_string(),
            concept: DEFAULT_CONCEPT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl EdgarConfig {
    /// Returns the CIK zero-padded to ten digits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCik`] if the CIK is empty, contains
    /// anything other than ASCII digits, or is longer than ten digits.
    pub fn padded_cik(&self) -> Result<String, ConfigError> {
        let cik = self.cik.trim();
        if cik.is_empty() || cik.len() > CIK_WIDTH || !cik.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidCik(self.cik.clone()));
        }
        Ok(format!("{:0>width$}", cik, width = CIK_WIDTH))
    }

    /// Checks every field without touching the network.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Empty("base URL"));
        }
        self.padded_cik()?;
        if self.taxonomy.trim().is_empty() {
            return Err(ConfigError::Empty("taxonomy"));
        }
        if self.concept.trim().is_empty() {
            return Err(ConfigError::Empty("concept"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Empty("user agent"));
        }
        HeaderValue::from_str(&self.user_agent)
            .map_err(|_| ConfigError::InvalidUserAgent(self.user_agent.clone()))?;
        Ok(())
    }

    /// Builds the company concept URL.
    ///
    /// `<base_url>/api/xbrl/companyconcept/CIK<cik>/<taxonomy>/<concept>.json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCik`] if the CIK cannot be padded.
    pub fn concept_url(&self) -> Result<String, ConfigError> {
        Ok(format!(
            "{}/api/xbrl/companyconcept/CIK{}/{}/{}.json",
            self.base_url.trim_end_matches('/'),
            self.padded_cik()?,
            self.taxonomy,
            self.concept
        ))
    }
}
