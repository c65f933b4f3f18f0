//! Per-URL company scraping.
//!
//! Each URL gets exactly one unconditional HTTP GET. The response body is
//! parsed leniently with [`scraper`], so real-world broken markup never
//! fails the parse step; only transport errors and non-success statuses can
//! fail a URL. Extraction itself is a sequence of independent optional
//! lookups, each falling back to [`NOT_AVAILABLE`]:
//!
//! - company name from the first `<title>` element
//! - email from the first `mailto:` anchor
//! - phone from the first `tel:` anchor
//! - a crude tech-stack guess from three substring checks on visible text
//!
//! Any error collapses that URL's result to a bare [`ScrapeOutcome::Failure`]
//! carrying the error text; later URLs in the batch are unaffected.

use crate::models::{CompanyInfo, NOT_AVAILABLE, ScrapeOutcome};
use reqwest::get;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, error, info, instrument};

/// Substrings whose presence in the page's visible text counts as "modern
/// web tech". Checked case-insensitively, as-is.
const TECH_MARKERS: [&str; 3] = ["angular", ".net", "react"];

/// Scrape one URL into a [`ScrapeOutcome`].
///
/// This is the error boundary for a single URL: any failure while fetching
/// becomes a [`ScrapeOutcome::Failure`] with the error's display text, and
/// never propagates to the caller. There is no retry.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn scrape_company(url: &str) -> ScrapeOutcome {
    match fetch_company(url).await {
        Ok(info) => {
            debug!(company = %info.company_name, "Scraped company record");
            ScrapeOutcome::Success(info)
        }
        Err(e) => {
            error!(error = %e, %url, "Scrape failed");
            ScrapeOutcome::Failure {
                message: e.to_string(),
            }
        }
    }
}

/// Fetch a page and extract its company record.
///
/// Issues a single GET with no timeout or header overrides. Non-success
/// statuses are errors, matching a fetch layer that throws on non-2xx.
async fn fetch_company(url: &str) -> Result<CompanyInfo, Box<dyn Error>> {
    let body = get(url).await?.error_for_status()?.text().await?;
    info!(bytes = body.len(), "Fetched page");
    Ok(extract_company(&body, url))
}

/// Extract a [`CompanyInfo`] from an HTML body.
///
/// Parsing is lenient and never fails; every lookup that finds nothing
/// falls back to [`NOT_AVAILABLE`]. The `url` is recorded verbatim as the
/// `website` field.
pub fn extract_company(body: &str, url: &str) -> CompanyInfo {
    let document = Html::parse_document(body);

    let title_selector = Selector::parse("title").unwrap();
    let company_name = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join("").trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let email = first_link_target(&document, r#"a[href^="mailto:"]"#, "mailto:");
    let phone = first_link_target(&document, r#"a[href^="tel:"]"#, "tel:");

    let visible_text = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let tech_stack = if TECH_MARKERS.iter().any(|m| visible_text.contains(m)) {
        "Modern web tech detected".to_string()
    } else {
        "Unknown".to_string()
    };

    CompanyInfo {
        company_name,
        website: url.to_string(),
        email,
        phone,
        tech_stack,
    }
}

/// The `href` of the first anchor matching `selector`, with `prefix`
/// stripped, or [`NOT_AVAILABLE`] if no such anchor exists.
fn first_link_target(document: &Html, selector: &str, prefix: &str) -> String {
    // Selector strings are literals; parse failures are programmer errors.
    let anchor_selector = Selector::parse(selector).unwrap();
    document
        .select(&anchor_selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|href| href.strip_prefix(prefix).unwrap_or(href).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
