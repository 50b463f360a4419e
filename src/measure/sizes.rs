// src/measure/sizes.rs
// =============================================================================
// This module downloads each resource and adds up its size.
//
// How it works:
// 1. Flatten the manifest into (category, url) jobs, css first, then js,
//    then img, each in document order
// 2. Fetch the jobs, by default one at a time
// 3. Fold the outcomes into per-category totals plus a list of failures
//
// With --concurrency above 1 several requests may be in flight, but results
// are still consumed in manifest order (`buffered`, not `buffer_unordered`),
// so totals and the per-resource list never depend on timing.
//
// Rust concepts:
// - Streams: for bounded, in-order async fetching
// - fold: accumulating a result without ever short-circuiting
// =============================================================================

use crate::error::{NetworkError, ResourceFetchError};
use crate::extract::{Category, ResourceManifest};
use crate::fetch::{fetch, FetchResult};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Serialize;

/// Total bytes downloaded per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub css: u64,
    pub js: u64,
    pub img: u64,
}

impl SizeReport {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Css => self.css,
            Category::Js => self.js,
            Category::Img => self.img,
        }
    }

    fn add(&mut self, category: Category, bytes: u64) {
        let total = match category {
            Category::Css => &mut self.css,
            Category::Js => &mut self.js,
            Category::Img => &mut self.img,
        };
        *total += bytes;
    }

    /// Sum of all three categories.
    pub fn total(&self) -> u64 {
        self.css + self.js + self.img
    }
}

/// One resource from the manifest and what it weighed.
///
/// `bytes` is `None` when the fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSize {
    pub category: Category,
    pub url: String,
    pub bytes: Option<u64>,
}

/// Everything the measurer learned about a manifest.
#[derive(Debug, Default)]
pub struct Measurement {
    pub sizes: SizeReport,
    /// Every manifest entry, in manifest order
    pub resources: Vec<ResourceSize>,
    pub failures: Vec<ResourceFetchError>,
}

impl Measurement {
    // Folds one fetch outcome in
    fn record(mut self, category: Category, url: &str, outcome: Result<FetchResult, NetworkError>) -> Self {
        match outcome {
            Ok(fetched) => {
                let bytes = fetched.size();
                tracing::debug!(%category, url, bytes, "measured resource");
                self.sizes.add(category, bytes);
                self.resources.push(ResourceSize {
                    category,
                    url: url.to_string(),
                    bytes: Some(bytes),
                });
            }
            Err(error) => {
                let failure = ResourceFetchError::new(category, error);
                tracing::warn!(%category, url, cause = %failure.cause, "resource fetch failed");
                self.resources.push(ResourceSize {
                    category,
                    url: url.to_string(),
                    bytes: None,
                });
                self.failures.push(failure);
            }
        }
        self
    }
}

/// Fetches every URL in `manifest` and totals the body sizes per category.
///
/// `concurrency` is how many requests may be in flight at once; 0 is treated
/// as 1. Failures are collected, never returned early.
pub async fn measure_resources(client: &Client, manifest: &ResourceManifest, concurrency: usize) -> Measurement {
    let jobs = manifest
        .iter()
        .flat_map(|(category, urls)| urls.iter().map(move |url| (category, url.as_str())));

    let outcomes: Vec<_> = stream::iter(jobs.map(move |(category, url)| async move {
        let outcome = fetch(client, url).await;
        (category, url, outcome)
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await;

    outcomes
        .into_iter()
        .fold(Measurement::default(), |measurement, (category, url, outcome)| {
            measurement.record(category, url, outcome)
        })
}
