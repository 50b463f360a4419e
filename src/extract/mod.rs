// src/extract/mod.rs
// =============================================================================
// This module finds the resources a page links to.
//
// Submodules:
// - manifest: the Category enum and the ResourceManifest it indexes
// - html: parses HTML and collects stylesheet, script and image URLs
//
// Rust concepts:
// - Enums as closed sets of keys: Category can only ever be css, js or img,
//   so "exactly three categories" is checked by the compiler
// =============================================================================

mod html;
mod manifest;

pub use html::{base_url, extract_resources};
pub use manifest::{Category, ResourceManifest};
