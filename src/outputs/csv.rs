//! CSV export for a run's scraped records.
//!
//! The header row is the union of every record's keys in first-occurrence
//! order, so a batch of successes followed by a failure yields
//! `Company Name,Website,Email,Phone,Tech Stack,Error`. Rows are aligned to
//! the header with empty cells for absent keys.
//!
//! Escaping is deliberately lossy: a literal comma inside a value is
//! replaced with a single space, and nothing is quoted. That is the
//! documented contract of this exporter, not an oversight to fix.

use crate::models::ScrapeOutcome;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Render the records to CSV text.
///
/// Returns `None` for an empty record list, which the exporter treats as
/// "write nothing". Lines are `\n`-terminated, including the last.
pub fn render_csv(results: &[ScrapeOutcome]) -> Option<String> {
    if results.is_empty() {
        return None;
    }

    let mut headers: Vec<&str> = Vec::new();
    for result in results {
        for (key, _) in result.fields() {
            if !headers.contains(&key) {
                headers.push(key);
            }
        }
    }

    let mut out = String::new();
    out.push_str(&headers.join(","));
    out.push('\n');

    for result in results {
        let fields = result.fields();
        let row = headers
            .iter()
            .map(|h| {
                fields
                    .iter()
                    .find(|(key, _)| key == h)
                    .map(|(_, value)| value.replace(',', " "))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }

    Some(out)
}

/// Write the records as CSV to `path`, overwriting any existing file.
///
/// An empty record list writes nothing and creates no file. Filesystem
/// errors propagate to the caller; scraping is already finished by the
/// time this runs, so a failed export loses nothing but the file.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn export_results(results: &[ScrapeOutcome], path: &str) -> Result<(), Box<dyn Error>> {
    let Some(csv) = render_csv(results) else {
        info!("No records to export; skipping CSV write");
        return Ok(());
    };

    fs::write(path, csv).await?;
    info!(rows = results.len(), "Wrote CSV export");
    Ok(())
}
