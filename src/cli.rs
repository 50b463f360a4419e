// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The only required input is the URL of the page to weigh. It can be given
// as an argument; if it isn't, we ask for it interactively, one line from
// stdin.
//
// Whatever the user typed goes through `normalize_url` before use.
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub const PROMPT: &str = "Enter the URL of the site to analyze: ";

#[derive(Parser, Debug)]
#[command(
    name = "page-weight",
    version = "0.1.0",
    about = "Measure how heavy a web page is",
    long_about = "page-weight fetches a web page, finds the stylesheets, scripts and images it links to, \
                  downloads each of them and prints the page load time and the size of every category."
)]
pub struct Cli {
    /// URL of the page to analyze (prompted for when omitted)
    ///
    /// A URL that does not start with "http" gets "http://" in front.
    pub url: Option<String>,

    /// Output the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Timeout for each HTTP request, in seconds (at least 1)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// How many resources may be downloaded at the same time
    ///
    /// The default of 1 downloads them strictly one after another.
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Log more (-v for progress, -vv for every request)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Prefixes `http://` unless the input already starts with "http".
///
/// This is a plain prefix check: "https://..." is kept as is, and a bare
/// domain becomes "http://domain", never https.
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("http://{}", input)
    }
}

/// Prints the prompt and reads one line from stdin.
pub async fn prompt_for_url() -> Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(PROMPT.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("failed to read URL from stdin")?;

    Ok(line.trim().to_string())
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is `url` an Option<String>?
//    - clap makes Option fields optional positional arguments
//    - None means "ask the user", which keeps the interactive behaviour
//      while still allowing `page-weight example.com` in scripts
//
// 2. What does ArgAction::Count do?
//    - Each -v adds one, so -vv gives 2
// -----------------------------------------------------------------------------
