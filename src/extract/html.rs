// src/extract/html.rs
// =============================================================================
// This module extracts resource URLs from an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never fails on broken markup: it repairs
//   what it can and we extract whatever elements come out
//
// What we collect (document order, duplicates kept):
// - css: <link rel="stylesheet" href="...">
// - js:  <script src="...">   (inline scripts have no src and are skipped)
// - img: <img src="...">
//
// Every reference is resolved against the base URL with the `url` crate, so
// the manifest only ever contains absolute URLs.
// =============================================================================

use super::manifest::{Category, ResourceManifest};
use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, Selector};
use url::Url;

// Which elements feed which category, and which attribute holds the URL
//
// The link selector only narrows down to <link rel=...>; the stylesheet
// check itself happens in `is_stylesheet` because rel is a token list.
const RESOURCE_QUERIES: [(Category, &str, &str); 3] = [
    (Category::Css, "link[rel]", "href"),
    (Category::Js, "script[src]", "src"),
    (Category::Img, "img[src]", "src"),
];

/// Returns the base URL used to resolve references found on `page_url`.
///
/// A URL with no path gets a trailing slash (`http://example.com` becomes
/// `http://example.com/`). A URL that already has a path is left alone, so
/// `page.html` next to `http://example.com/blog/post` resolves into
/// `/blog/`, like a browser would.
pub fn base_url(page_url: &str) -> String {
    match Url::parse(page_url) {
        // Url always serializes an empty http(s) path as "/"
        Ok(url) => url.into(),
        Err(_) => {
            if page_url.ends_with('/') {
                page_url.to_string()
            } else {
                format!("{}/", page_url)
            }
        }
    }
}

/// Extracts stylesheet, script and image URLs from HTML content.
///
/// Example:
///   html = `<link rel="stylesheet" href="/style.css">`
///   base_url = "http://example.com/"
///   css = ["http://example.com/style.css"]
pub fn extract_resources(html: &str, base_url: &str) -> ResourceManifest {
    let mut manifest = ResourceManifest::default();

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(base_url, error = %e, "invalid base URL, no resources extracted");
            return manifest;
        }
    };

    let document = parse_html(html);

    for (category, selector, attr) in RESOURCE_QUERIES {
        // The selectors are constants and known to be valid
        let selector = Selector::parse(selector).unwrap();

        for element in document.select(&selector) {
            if category == Category::Css && !is_stylesheet(&element) {
                continue;
            }

            let Some(reference) = element.value().attr(attr).filter(|v| !v.is_empty()) else {
                continue;
            };

            match base.join(reference) {
                Ok(url) => manifest.push(category, url.into()),
                Err(e) => {
                    tracing::debug!(reference, error = %e, "skipping unresolvable {} reference", category);
                }
            }
        }
    }

    manifest
}

// Parses with scripting disabled, so <noscript> contents become elements
// instead of raw text and their resources are found too
fn parse_html(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(Html::new_document(), opts).one(html)
}

// rel is a space-separated list of link types, compared case-insensitively
fn is_stylesheet(element: &ElementRef) -> bool {
    element
        .value()
        .attr("rel")
        .map(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        })
        .unwrap_or(false)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why base.join() and not Url::parse() first?
//    - join() already handles every case: absolute references come back
//      unchanged, "//cdn.example.com/x.js" picks up the base scheme, and
//      "/x.css" or "x.css" are resolved against the base path
//
// 2. Why skip empty attributes?
//    - <img src=""> is treated like a missing attribute. A whitespace-only
//      value is not empty, so it is kept and resolves to the base URL
//
// 3. What gets into the manifest that can't be fetched?
//    - data: and other non-HTTP references are absolute, so they are kept
//    - The measurer reports them as failed fetches and counts 0 bytes
// -----------------------------------------------------------------------------
