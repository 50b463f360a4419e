// src/fetch/mod.rs
// =============================================================================
// This module downloads things over HTTP.
//
// Submodules:
// - http: builds the shared client and performs a single timed GET
//
// Both the page itself and every resource on it go through the same
// `fetch` function, so they fail in exactly the same ways.
// =============================================================================

mod http;

pub use http::{build_client, fetch, FetchResult};
