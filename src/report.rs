// src/report.rs
// =============================================================================
// This module turns measurements into the summary the user sees.
//
// It never prints anything itself. `generate_report` builds a Report value,
// and main.rs decides where it goes:
// - Display gives the plain text summary
// - Serialize gives the --json output
// =============================================================================

use crate::error::ResourceFetchError;
use crate::extract::{Category, ResourceManifest};
use crate::measure::{ResourceSize, SizeReport};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// The summary of one analyzed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub url: String,
    pub load_time_secs: f64,
    /// Bytes across all resources (the HTML document itself not included)
    pub total_size: u64,
    /// Every discovered reference, including ones that failed to download
    pub resource_count: usize,
    pub sizes: SizeReport,
}

/// Builds the report for `url` from the page load time, the manifest and
/// the measured sizes.
pub fn generate_report(url: &str, load_time: Duration, manifest: &ResourceManifest, sizes: &SizeReport) -> Report {
    Report {
        url: url.to_string(),
        load_time_secs: load_time.as_secs_f64(),
        total_size: sizes.total(),
        resource_count: manifest.resource_count(),
        sizes: *sizes,
    }
}

// Bytes to kilobytes, the way the summary shows sizes
fn kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

fn label(category: Category) -> &'static str {
    match category {
        Category::Css => "CSS Size",
        Category::Js => "JS Size",
        Category::Img => "Image Size",
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "URL: {}", self.url)?;
        writeln!(f, "Page Load Time: {:.2} seconds", self.load_time_secs)?;
        writeln!(f, "Total Page Size: {:.2} KB", kb(self.total_size))?;
        writeln!(f, "Number of Resources: {}", self.resource_count)?;
        for category in Category::ALL {
            writeln!(f, "{}: {:.2} KB", label(category), kb(self.sizes.get(category)))?;
        }
        Ok(())
    }
}

// The --json document: the report plus per-resource detail
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    #[serde(flatten)]
    pub report: &'a Report,
    pub resources: &'a [ResourceSize],
    pub errors: Vec<String>,
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a Report, resources: &'a [ResourceSize], failures: &[ResourceFetchError]) -> Self {
        JsonReport {
            report,
            resources,
            errors: failures.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> ResourceManifest {
        ResourceManifest {
            css: vec!["http://example.com/a.css".to_string()],
            js: vec![
                "http://example.com/a.js".to_string(),
                "http://example.com/b.js".to_string(),
            ],
            img: vec![
                "http://example.com/1.png".to_string(),
                "http://example.com/2.png".to_string(),
                "http://example.com/3.png".to_string(),
            ],
        }
    }

    #[test]
    fn test_totals_are_derived_from_inputs() {
        let sizes = SizeReport { css: 1024, js: 512, img: 2048 };
        let report = generate_report("http://example.com", Duration::from_millis(1234), &sample_manifest(), &sizes);

        assert_eq!(report.total_size, 3584);
        assert_eq!(report.resource_count, 6);
        assert!((report.load_time_secs - 1.234).abs() < 1e-9);
    }

    #[test]
    fn test_count_includes_failed_resources() {
        // Only one image weighed anything, the rest failed
        let sizes = SizeReport { css: 0, js: 0, img: 100 };
        let report = generate_report("http://example.com", Duration::ZERO, &sample_manifest(), &sizes);
        assert_eq!(report.resource_count, 6);
        assert_eq!(report.total_size, 100);
    }

    #[test]
    fn test_text_summary_format() {
        let sizes = SizeReport { css: 1024, js: 1536, img: 10240 };
        let report = generate_report("http://example.com", Duration::from_millis(1500), &sample_manifest(), &sizes);

        let expected = "\
URL: http://example.com
Page Load Time: 1.50 seconds
Total Page Size: 12.50 KB
Number of Resources: 6
CSS Size: 1.00 KB
JS Size: 1.50 KB
Image Size: 10.00 KB
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_empty_page_summary() {
        let report = generate_report(
            "http://example.com/",
            Duration::from_millis(7),
            &ResourceManifest::default(),
            &SizeReport::default(),
        );
        let text = report.to_string();
        assert!(text.contains("Page Load Time: 0.01 seconds"));
        assert!(text.contains("Total Page Size: 0.00 KB"));
        assert!(text.contains("Number of Resources: 0"));
    }

    #[test]
    fn test_json_report_shape() {
        let sizes = SizeReport { css: 10, js: 20, img: 0 };
        let report = generate_report("http://example.com/", Duration::from_secs(1), &sample_manifest(), &sizes);
        let resources = vec![ResourceSize {
            category: Category::Css,
            url: "http://example.com/a.css".to_string(),
            bytes: Some(10),
        }];

        let value = serde_json::to_value(JsonReport::new(&report, &resources, &[])).unwrap();

        assert_eq!(value["url"], "http://example.com/");
        assert_eq!(value["total_size"], 30);
        assert_eq!(value["resource_count"], 6);
        assert_eq!(value["sizes"]["js"], 20);
        assert_eq!(value["resources"][0]["category"], "css");
        assert_eq!(value["errors"].as_array().unwrap().len(), 0);
    }
}
