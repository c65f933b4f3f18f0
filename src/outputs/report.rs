//! Console report for scraped records.
//!
//! Each record prints as a small block: a leading blank line, a banner,
//! then one `Key: Value` line per field in the record's presentation order.
//! Failures print the same way with a single `Error` line.

use crate::models::ScrapeOutcome;

/// Render one record's report block, including the leading blank line.
pub fn format_company_block(outcome: &ScrapeOutcome) -> String {
    let mut block = String::from("\n---- Company Info ----\n");
    for (key, value) in outcome.fields() {
        block.push_str(key);
        block.push_str(": ");
        block.push_str(value);
        block.push('\n');
    }
    block
}

/// Print one record's report block to stdout.
pub fn print_company_info(outcome: &ScrapeOutcome) {
    print!("{}", format_company_block(outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyInfo;

    #[test]
    fn test_success_block_layout() {
        let outcome = ScrapeOutcome::Success(CompanyInfo {
            company_name: "Acme".to_string(),
            website: "https://acme.test".to_string(),
            email: "info@acme.test".to_string(),
            phone: "N/A".to_string(),
            tech_stack: "Unknown".to_string(),
        });
        let block = format_company_block(&outcome);
        assert_eq!(
            block,
            "\n---- Company Info ----\n\
             Company Name: Acme\n\
             Website: https://acme.test\n\
             Email: info@acme.test\n\
             Phone: N/A\n\
             Tech Stack: Unknown\n"
        );
    }

    #[test]
    fn test_failure_block_has_single_error_line() {
        let outcome = ScrapeOutcome::Failure {
            message: "dns error".to_string(),
        };
        let block = format_company_block(&outcome);
        assert_eq!(block, "\n---- Company Info ----\nError: dns error\n");
    }
}
