//! Suite runner
//!
//! One pass over the case list: each case gets exactly one request, every
//! failure is captured in its report, and the pass never aborts early.

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::config::HarnessConfig;
use crate::http::SubmitClient;
use crate::models::{CaseReport, ExecResult, RunSummary, SuiteCase};

/// Runner for the submission suite
pub struct SuiteRunner {
    config: HarnessConfig,
    client: SubmitClient,
}

impl SuiteRunner {
    /// Create a runner for the given configuration
    pub fn new(config: HarnessConfig) -> Result<Self> {
        let client = SubmitClient::with_timeout(config.timeout_secs)?;
        Ok(Self { config, client })
    }

    /// Endpoint this runner posts to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Run a single case.
    ///
    /// Issues exactly one request. Transport failures and undecodable bodies
    /// become part of the report; nothing is retried and nothing escalates.
    pub async fn run_case(&self, case: SuiteCase) -> CaseReport {
        info!("Running {}", case);

        let submission = case.submission();

        match self.client.submit(&self.config.endpoint, &submission).await {
            Ok(response) => {
                if !response.is_success() {
                    debug!(
                        "{} answered HTTP {} for {}",
                        self.config.endpoint, response.status_code, case
                    );
                }

                match serde_json::from_str::<ExecResult>(&response.body) {
                    Ok(result) => CaseReport::from_response(
                        case,
                        response.status_code,
                        result,
                        response.duration_ms,
                    ),
                    Err(e) => {
                        warn!("Undecodable body for {}: {}", case, e);
                        CaseReport::from_undecodable(
                            case,
                            response.status_code,
                            format!("invalid result object: {e} (body: {})", snippet(&response.body)),
                            response.duration_ms,
                        )
                    }
                }
            }
            Err(e) => {
                error!("Request failed for {}: {}", case, e);
                CaseReport::from_transport_failure(case, e.to_string(), 0)
            }
        }
    }

    /// Run the given cases in order
    pub async fn run_cases(&self, cases: &[SuiteCase]) -> RunSummary {
        let started_at = Utc::now();
        let mut reports = Vec::with_capacity(cases.len());

        for &case in cases {
            let report = self.run_case(case).await;
            info!("  {}", report);
            reports.push(report);
        }

        let summary = RunSummary::new(&self.config.endpoint, started_at, reports);

        info!(
            "Pass completed: {}/{} passed ({:.1}%) in {}ms",
            summary.passed,
            summary.total,
            summary.pass_rate(),
            summary.total_duration_ms
        );

        summary
    }

    /// Run the whole built-in suite in order
    pub async fn run_all(&self) -> RunSummary {
        info!(
            "Starting submission pass against {} ({} cases)",
            self.config.endpoint,
            SuiteCase::all().len()
        );
        self.run_cases(&SuiteCase::all()).await
    }
}

/// Shorten a response body for a diagnostic line.
fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 120;

    if body.is_empty() {
        return "<empty>".to_string();
    }
    if body.chars().count() <= MAX_CHARS {
        return body.to_string();
    }
    let head: String = body.chars().take(MAX_CHARS).collect();
    format!("{head}...")
}
