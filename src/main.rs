//! # Company Scout
//!
//! A small lead-gathering tool that fetches a list of company websites,
//! pulls a handful of fields out of each page, prints them, and optionally
//! exports everything to a CSV file.
//!
//! ## Features
//!
//! - Reads a comma-separated URL list from stdin
//! - Extracts company name (page title), email (`mailto:` link),
//!   phone (`tel:` link), and a crude tech-stack guess per page
//! - Per-URL error isolation: a failed fetch becomes an `Error` record
//!   without aborting the rest of the batch
//! - Optional CSV export with a key-union header across all records
//!
//! ## Usage
//!
//! ```sh
//! company_scout
//! company_scout --output /tmp/leads.csv
//! ```
//!
//! ## Architecture
//!
//! The application is a single linear pipeline:
//! 1. **Input**: Split the stdin line into trimmed URL strings
//! 2. **Scrape**: One HTTP GET per URL, strictly in order
//! 3. **Report**: Print each record block to stdout as it completes
//! 4. **Export**: On request, write all records to a CSV file
//!
//! URLs are fetched one at a time on purpose: the printed report interleaves
//! with fetch completion, and that ordering is part of the tool's observable
//! behavior.

use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod input;
mod models;
mod outputs;
mod scrape;

use cli::Cli;
use outputs::{csv, report};

/// Read one line from stdin. EOF or a read error yields an empty string,
/// which downstream treats the same as blank input.
fn read_line() -> String {
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr; stdout is reserved for the scrape report itself.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("company_scout starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.output, "Parsed CLI arguments");

    // ---- Read the URL list ----
    println!("Enter a seed URL or multiple URLs separated by comma:");
    let Some(urls) = input::parse_url_list(&read_line()) else {
        println!("No URLs provided. Exiting...");
        return Ok(());
    };
    info!(count = urls.len(), "Parsed URL list");

    // ---- Scrape sequentially, printing each block as it lands ----
    let mut results = Vec::with_capacity(urls.len());
    for url in &urls {
        let outcome = scrape::scrape_company(url).await;
        report::print_company_info(&outcome);
        results.push(outcome);
    }
    info!(count = results.len(), "Scraping complete");

    // ---- Optional CSV export ----
    println!("\nExport results to CSV? (y/n):");
    let answer = read_line();
    if answer.trim().eq_ignore_ascii_case("y") {
        csv::export_results(&results, &args.output).await?;
        println!("Results exported to {}", args.output);
    } else {
        debug!("Export declined");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
