//! Command-line interface definitions for Company Scout.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The URL list itself is read interactively from stdin, not from flags.

use clap::Parser;

/// Command-line arguments for the Company Scout application.
///
/// # Examples
///
/// ```sh
/// # Default CSV destination in the working directory
/// company_scout
///
/// # Custom CSV destination
/// company_scout --output /tmp/leads.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Destination path for the CSV export
    #[arg(short, long, default_value = "scraped_companies.csv")]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_output() {
        let cli = Cli::parse_from(["company_scout"]);
        assert_eq!(cli.output, "scraped_companies.csv");
    }

    #[test]
    fn test_cli_output_override() {
        let cli = Cli::parse_from(["company_scout", "--output", "/tmp/leads.csv"]);
        assert_eq!(cli.output, "/tmp/leads.csv");
    }

    #[test]
    fn test_cli_short_flag() {
        let cli = Cli::parse_from(["company_scout", "-o", "out.csv"]);
        assert_eq!(cli.output, "out.csv");
    }
}
