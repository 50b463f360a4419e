// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (or prompt for the URL)
// 2. Fetch the page and time it
// 3. Extract the stylesheets, scripts and images it links to
// 4. Download every resource and total the sizes per category
// 5. Print the report
// 6. Exit with proper code (0 = report printed, 1 = page fetch failed,
//    2 = unexpected error)
//
// Everything runs one step after another on a single-threaded runtime.
// =============================================================================

mod cli;
mod error;
mod extract;
mod fetch;
mod measure;
mod report;

#[cfg(test)]
mod test_server;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use error::NetworkError;
use extract::ResourceManifest;
use measure::Measurement;
use reqwest::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let input = match &cli.url {
        Some(url) => url.clone(),
        None => cli::prompt_for_url().await?,
    };
    let url = cli::normalize_url(&input);

    let client = fetch::build_client(cli.timeout())?;

    let analysis = match analyze_page(&client, &url, cli.concurrency).await {
        Ok(analysis) => analysis,
        Err(e) => {
            // The page itself failed: nothing to report
            println!("{}", e);
            return Ok(1);
        }
    };

    print_analysis(&analysis, cli.json)?;
    Ok(0)
}

// Sends tracing output to stderr so stdout only carries the report
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Everything we learned about one page.
struct Analysis {
    report: report::Report,
    measurement: Measurement,
}

// Runs the whole pipeline for `url`. Only the page fetch can fail; resource
// failures end up in `measurement.failures`.
async fn analyze_page(client: &Client, url: &str, concurrency: usize) -> Result<Analysis, NetworkError> {
    tracing::info!(url, "fetching page");
    let page = fetch::fetch(client, url).await?;

    let base = extract::base_url(url);
    let manifest: ResourceManifest = extract::extract_resources(&page.text(), &base);
    tracing::info!(
        css = manifest.css.len(),
        js = manifest.js.len(),
        img = manifest.img.len(),
        "extracted resources"
    );
    if manifest.is_empty() {
        tracing::info!("page links no stylesheets, scripts or images");
    }

    let measurement = measure::measure_resources(client, &manifest, concurrency).await;
    tracing::info!(failed = measurement.failures.len(), "measured resources");

    let report = report::generate_report(url, page.elapsed, &manifest, &measurement.sizes);

    Ok(Analysis { report, measurement })
}

fn print_analysis(analysis: &Analysis, json: bool) -> Result<()> {
    if json {
        // Keep stdout clean JSON; resource errors go to stderr
        for failure in &analysis.measurement.failures {
            eprintln!("{}", failure);
        }
        let document = report::JsonReport::new(
            &analysis.report,
            &analysis.measurement.resources,
            &analysis.measurement.failures,
        );
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        for failure in &analysis.measurement.failures {
            println!("{}", failure);
        }
        println!();
        print!("{}", analysis.report);
    }
    Ok(())
}
