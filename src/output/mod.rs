//! Output formatting module
//!
//! Provides various output formats for case reports.

mod formatter;

pub use formatter::{OutputFormat, ReportFormatter};
