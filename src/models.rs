//! Data models for scraped company records.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`CompanyInfo`]: the fields extracted from a single page
//! - [`ScrapeOutcome`]: the per-URL result, either a full record or an error
//!
//! A page either yields a complete [`CompanyInfo`] or nothing at all: any
//! failure while fetching or parsing collapses the whole result to
//! [`ScrapeOutcome::Failure`], with no partial fields retained. Fields that
//! were simply not found on an otherwise healthy page hold the sentinel
//! [`NOT_AVAILABLE`] instead.

/// Sentinel value for a field that was not found on a successfully
/// fetched page.
pub const NOT_AVAILABLE: &str = "N/A";

/// Company details extracted from one page.
///
/// Every field is always populated: extraction falls back to
/// [`NOT_AVAILABLE`] rather than leaving a field empty, so a successful
/// record always presents the same five keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyInfo {
    /// Text of the page's `<title>` element, trimmed.
    pub company_name: String,
    /// The input URL, exactly as the user supplied it (not canonicalized).
    pub website: String,
    /// Address from the first `mailto:` link, prefix stripped.
    pub email: String,
    /// Number from the first `tel:` link, prefix stripped.
    pub phone: String,
    /// `"Modern web tech detected"` or `"Unknown"`.
    pub tech_stack: String,
}

/// The result of scraping one URL.
///
/// Exactly one outcome exists per input URL. A failure replaces the record
/// entirely; there is no partial success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// The page was fetched and parsed; all five fields are present.
    Success(CompanyInfo),
    /// Fetching or parsing failed; `message` is the error's display text.
    Failure { message: String },
}

impl ScrapeOutcome {
    /// The record's key/value pairs in presentation order.
    ///
    /// Successful records always yield the same five keys in the same
    /// order; failures yield a single `Error` entry. This order drives
    /// both the printed report and the CSV header union.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            ScrapeOutcome::Success(info) => vec![
                ("Company Name", info.company_name.as_str()),
                ("Website", info.website.as_str()),
                ("Email", info.email.as_str()),
                ("Phone", info.phone.as_str()),
                ("Tech Stack", info.tech_stack.as_str()),
            ],
            ScrapeOutcome::Failure { message } => vec![("Error", message.as_str())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> CompanyInfo {
        CompanyInfo {
            company_name: "Acme".to_string(),
            website: "https://acme.test".to_string(),
            email: NOT_AVAILABLE.to_string(),
            phone: "+1-555-0100".to_string(),
            tech_stack: "Unknown".to_string(),
        }
    }

    #[test]
    fn test_success_field_order() {
        let outcome = ScrapeOutcome::Success(sample_info());
        let keys: Vec<&str> = outcome.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["Company Name", "Website", "Email", "Phone", "Tech Stack"]
        );
    }

    #[test]
    fn test_failure_has_only_error_key() {
        let outcome = ScrapeOutcome::Failure {
            message: "connection refused".to_string(),
        };
        let fields = outcome.fields();
        assert_eq!(fields, vec![("Error", "connection refused")]);
    }

    #[test]
    fn test_missing_field_keeps_sentinel() {
        let outcome = ScrapeOutcome::Success(sample_info());
        let email = outcome
            .fields()
            .iter()
            .find(|(k, _)| *k == "Email")
            .map(|(_, v)| v.to_string());
        assert_eq!(email.as_deref(), Some(NOT_AVAILABLE));
    }
}
