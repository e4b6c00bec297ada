//! Data models for the submission harness
//!
//! This module contains all data structures used throughout the application.

mod case;
mod report;

pub use case::{Submission, SuiteCase};
pub use report::{CaseReport, CaseStatus, ExecResult, RunSummary};
