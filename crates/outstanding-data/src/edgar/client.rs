//! SEC EDGAR company concept client.

use super::encoding::{ACCEPT_ENCODING, ContentEncoding};
use crate::config::EdgarConfig;
use crate::error::{FetchError, Result};
use reqwest::header;
use tracing::{debug, warn};

/// Client for a single company concept document.
///
/// One call to [`fetch`](Self::fetch) is one outbound request. There are no
/// retries; any failure is returned as a [`FetchError`].
pub struct ConceptClient {
    client: reqwest::Client,
    config: EdgarConfig,
}

impl ConceptClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidConfig`] if the configuration does not
    /// validate, or [`FetchError::Client`] if the HTTP client cannot be built.
    ///
    /// # Example
    /// ```no_run
    /// use outstanding_data::{EdgarConfig, edgar::ConceptClient};
    ///
    /// # fn example() -> outstanding_data::Result<()> {
    /// let client = ConceptClient::new(EdgarConfig {
    ///     cik: "320193".to_string(),
    ///     taxonomy: "us-gaap".to_string(),
    ///     concept: "Assets".to_string(),
    ///     ..EdgarConfig::default()
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: EdgarConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self { client, config })
    }

    /// Configuration this client was built with.
    pub const fn config(&self) -> &EdgarConfig {
        &self.config
    }

    /// Fetch the configured company concept document.
    ///
    /// # Errors
    ///
    /// See [`fetch_url`](Self::fetch_url).
    pub async fn fetch(&self) -> Result<String> {
        let url = self.config.concept_url()?;
        self.fetch_url(&url).await
    }

    /// Fetch `url` and return the decoded body.
    ///
    /// Sends the configured `User-Agent` and `Accept-Encoding: gzip, deflate`,
    /// then undoes whatever `Content-Encoding` the server applied.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] on transport failure,
    /// [`FetchError::Status`] on a non-success status, and
    /// [`FetchError::UnsupportedEncoding`], [`FetchError::Decompress`] or
    /// [`FetchError::Utf8`] if the body cannot be decoded.
    pub async fn fetch_url(&self, url: &str) -> Result<String> {
        debug!(url, "fetching company concept");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT_ENCODING, ACCEPT_ENCODING)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "SEC API returned non-success status");
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        // Header values that are not visible ASCII are treated as unknown encodings.
        let encoding = match response.headers().get(header::CONTENT_ENCODING) {
            Some(value) => ContentEncoding::from_header(Some(value.to_str().map_err(|_| {
                FetchError::UnsupportedEncoding(String::from_utf8_lossy(value.as_bytes()).into())
            })?))?,
            None => ContentEncoding::Identity,
        };

        let body = response.bytes().await?;
        debug!(
            encoding = encoding.as_str(),
            bytes = body.len(),
            "decoding response body"
        );
        encoding.decode(&body)
    }
}

impl std::fmt::Debug for ConceptClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
