// src/fetch/http.rs
// =============================================================================
// This module performs one GET request and times it.
//
// Key functionality:
// - Validates the URL before touching the network (http/https only)
// - Measures wall-clock time from sending the request until the whole body
//   has been read
// - Treats any status outside 2xx/3xx as a failure
// - Categorizes transport errors (timeout, connection, other)
//
// There are no retries. A failure is returned to the caller, who decides
// whether it is fatal (the page) or can be skipped (a resource).
// =============================================================================

use crate::error::{FetchError, NetworkError};
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// The body of a successful GET plus how long it took.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub body: Vec<u8>,
    pub elapsed: Duration,
}

impl FetchResult {
    /// Body decoded as UTF-8. Invalid sequences become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn size(&self) -> u64 {
        self.body.len() as u64
    }
}

/// Builds the HTTP client shared by every request of one run.
///
/// The timeout applies to each request as a whole (connect, headers and
/// body). Redirects use reqwest's default policy.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Fetches `url` and returns its body and the elapsed time.
pub async fn fetch(client: &Client, url: &str) -> Result<FetchResult, NetworkError> {
    let parsed = Url::parse(url).map_err(|e| NetworkError::new(url, e))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(NetworkError::new(
            url,
            FetchError::UnsupportedScheme(parsed.scheme().to_string()),
        ));
    }

    let start = Instant::now();

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| NetworkError::new(url, e))?;

    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(NetworkError::new(url, FetchError::Status(status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| NetworkError::new(url, e))?;

    let elapsed = start.elapsed();
    tracing::debug!(url, bytes = body.len(), ?elapsed, "fetched");

    Ok(FetchResult {
        body: body.to_vec(),
        elapsed,
    })
}
