//! Output modules for scraped company records.
//!
//! # Submodules
//!
//! - [`report`]: Formats and prints one record block per URL to stdout
//! - [`csv`]: Exports the whole run to a CSV file on request
//!
//! The report is the primary surface of the tool, so diagnostics elsewhere
//! go to stderr and never interleave with it.

pub mod csv;
pub mod report;
