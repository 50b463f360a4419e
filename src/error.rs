// src/error.rs
// =============================================================================
// Typed errors for everything that can go wrong while weighing a page.
//
// There are two kinds of failure the rest of the program cares about:
// - NetworkError: fetching one URL failed (bad URL, timeout, refused
//   connection, HTTP error status). Fatal when it happens to the page itself.
// - ResourceFetchError: the same failure, but for a stylesheet, script or
//   image. The measurer records it and keeps going.
//
// Both wrap a FetchError, which says *why* the request failed.
//
// We use `thiserror` to derive std::error::Error and Display, and keep
// `anyhow` for the application layer in main.rs.
// =============================================================================

use crate::extract::Category;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a single GET request failed.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL could not be parsed at all
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed, but it is not http:// or https://
    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// The client timeout elapsed before the response was fully read
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    /// Could not connect (DNS failure, connection refused, TLS handshake...)
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// Any other transport-level failure
    #[error(transparent)]
    Request(reqwest::Error),

    /// The server answered, but not with a 2xx or 3xx status
    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),
}

impl From<reqwest::Error> for FetchError {
    // Categorizes reqwest errors the same way for every caller
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout(error)
        } else if error.is_connect() {
            FetchError::Connect(error)
        } else {
            FetchError::Request(error)
        }
    }
}

/// A failed fetch, together with the URL that failed.
#[derive(Error, Debug)]
#[error("Error fetching URL {url}: {cause}")]
pub struct NetworkError {
    pub url: String,
    #[source]
    pub cause: FetchError,
}

impl NetworkError {
    pub fn new(url: impl Into<String>, cause: impl Into<FetchError>) -> Self {
        NetworkError {
            url: url.into(),
            cause: cause.into(),
        }
    }
}

/// A resource on the page could not be fetched.
///
/// It still counts towards the number of resources, but adds 0 bytes.
#[derive(Error, Debug)]
#[error("Error fetching {url}: {cause}")]
pub struct ResourceFetchError {
    pub category: Category,
    pub url: String,
    #[source]
    pub cause: FetchError,
}

impl ResourceFetchError {
    pub fn new(category: Category, error: NetworkError) -> Self {
        ResourceFetchError {
            category,
            url: error.url,
            cause: error.cause,
        }
    }
}
