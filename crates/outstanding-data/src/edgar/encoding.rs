//! Content-Encoding handling for EDGAR responses.
//!
//! The client advertises `gzip, deflate` itself, so decompression is done here
//! rather than by the HTTP stack.

use crate::error::{FetchError, Result};
use flate2::read::{GzDecoder, ZlibDecoder};
use std::io::Read;

/// Value sent in the `Accept-Encoding` request header.
pub const ACCEPT_ENCODING: &str = "gzip, deflate";

/// Encoding applied to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    /// No encoding (header absent, empty, or `identity`)
    Identity,
    /// `gzip` or `x-gzip`
    Gzip,
    /// `deflate` (zlib-wrapped, per RFC 9110)
    Deflate,
}

impl ContentEncoding {
    /// Parses a `Content-Encoding` header value.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::UnsupportedEncoding`] for anything else, including
    /// stacked encodings such as `gzip, br`.
    pub fn from_header(value: Option<&str>) -> Result<Self> {
        let Some(value) = value.map(str::trim) else {
            return Ok(Self::Identity);
        };
        match value.to_ascii_lowercase().as_str() {
            "" | "identity" => Ok(Self::Identity),
            "gzip" | "x-gzip" => Ok(Self::Gzip),
            "deflate" => Ok(Self::Deflate),
            _ => Err(FetchError::UnsupportedEncoding(value.to_string())),
        }
    }

    /// Name used in log lines and errors.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Gzip => "gzip",
            Self::Deflate => "deflate",
        }
    }

    /// Undoes this encoding and decodes the result as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Decompress`] if the body is not valid for the
    /// encoding and [`FetchError::Utf8`] if the decoded bytes are not UTF-8.
    pub fn decode(&self, body: &[u8]) -> Result<String> {
        let bytes = match self {
            Self::Identity => body.to_vec(),
            Self::Gzip => inflate(GzDecoder::new(body), self.as_str())?,
            Self::Deflate => inflate(ZlibDecoder::new(body), self.as_str())?,
        };
        Ok(String::from_utf8(bytes)?)
    }
}

fn inflate<R: Read>(mut decoder: R, encoding: &'static str) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|source| FetchError::Decompress { encoding, source })?;
    Ok(out)
}
