// src/measure/mod.rs
// =============================================================================
// This module weighs the resources found on a page.
//
// Submodules:
// - sizes: fetches every URL in a manifest and totals bytes per category
//
// A resource that fails to download never stops the run. It is recorded as
// a ResourceFetchError, adds 0 bytes, and we move on to the next one.
// =============================================================================

mod sizes;

pub use sizes::{measure_resources, Measurement, ResourceSize, SizeReport};
