//! Case outcome models
//!
//! Defines the result object returned by the endpoint and the per-case and
//! per-run records the harness reports.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SuiteCase;

/// Result object produced by the endpoint.
///
/// Decoded leniently: every field is optional and unknown fields are ignored.
/// The endpoint owns this shape; the harness only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    pub success: Option<bool>,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl ExecResult {
    /// A missing `success` field counts as falsy.
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

/// Terminal state of a single case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    /// Response arrived with `success: true`
    Pass,
    /// Response arrived with `success` falsy or an undecodable body
    Fail,
    /// The request itself failed (refused, timeout, DNS)
    Error,
}

impl CaseStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            CaseStatus::Pass => "✓",
            CaseStatus::Fail => "✗",
            CaseStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CaseStatus::Pass)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Pass => write!(f, "PASS"),
            CaseStatus::Fail => write!(f, "FAIL"),
            CaseStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Record of one case's trip through the endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: SuiteCase,
    pub status: CaseStatus,
    /// HTTP status code, when a response arrived at all
    pub http_status: Option<u16>,
    /// Decoded result object, when the body could be read
    pub result: Option<ExecResult>,
    /// Transport or decode diagnostic
    pub failure: Option<String>,
    pub duration_ms: u64,
}

impl CaseReport {
    /// Report for a case whose response body decoded cleanly.
    pub fn from_response(
        case: SuiteCase,
        http_status: u16,
        result: ExecResult,
        duration_ms: u64,
    ) -> Self {
        let status = if result.is_success() {
            CaseStatus::Pass
        } else {
            CaseStatus::Fail
        };
        Self {
            case,
            status,
            http_status: Some(http_status),
            result: Some(result),
            failure: None,
            duration_ms,
        }
    }

    /// Report for a response whose body was not the expected result object.
    pub fn from_undecodable(
        case: SuiteCase,
        http_status: u16,
        diagnostic: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            case,
            status: CaseStatus::Fail,
            http_status: Some(http_status),
            result: None,
            failure: Some(diagnostic.into()),
            duration_ms,
        }
    }

    /// Report for a request that never produced a response.
    pub fn from_transport_failure(
        case: SuiteCase,
        failure: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            case,
            status: CaseStatus::Error,
            http_status: None,
            result: None,
            failure: Some(failure.into()),
            duration_ms,
        }
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.case,
            self.duration_ms
        )?;
        if let Some(failure) = &self.failure {
            write!(f, " - {failure}")?;
        }
        Ok(())
    }
}

/// Summary of one full pass over the suite.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub endpoint: String,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub reports: Vec<CaseReport>,
}

impl RunSummary {
    pub fn new(
        endpoint: impl Into<String>,
        started_at: DateTime<Utc>,
        reports: Vec<CaseReport>,
    ) -> Self {
        let total = reports.len();
        let passed = reports
            .iter()
            .filter(|r| r.status == CaseStatus::Pass)
            .count();
        let failed = reports
            .iter()
            .filter(|r| r.status == CaseStatus::Fail)
            .count();
        let errors = reports
            .iter()
            .filter(|r| r.status == CaseStatus::Error)
            .count();
        let total_duration_ms = reports.iter().map(|r| r.duration_ms).sum();

        Self {
            endpoint: endpoint.into(),
            started_at,
            total,
            passed,
            failed,
            errors,
            total_duration_ms,
            reports,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }
}
