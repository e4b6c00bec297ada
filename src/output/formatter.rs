//! Output formatters for case reports
//!
//! Provides console, JSON, and summary output formats.

#![allow(dead_code)]

use crate::models::{CaseReport, CaseStatus, RunSummary};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Some(OutputFormat::Console),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Report formatter
pub struct ReportFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single case report
    pub fn format_case(&self, report: &CaseReport) -> String {
        match self.format {
            OutputFormat::Console => self.format_case_console(report),
            OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
            OutputFormat::Summary => self.format_case_brief(report),
        }
    }

    /// The per-case console block.
    ///
    /// A case that never got a response prints only the failure line. A case
    /// with a response prints the HTTP status and the decoded result fields,
    /// with `Error:` appearing only when the result is not a success.
    fn format_case_console(&self, report: &CaseReport) -> String {
        let mut lines = vec![format!("\n=== Testing {} ===", report.case.name())];

        if report.status == CaseStatus::Error {
            let reason = report.failure.as_deref().unwrap_or("unknown error");
            lines.push(format!("Request failed: {reason}"));
            return lines.join("\n");
        }

        if let Some(code) = report.http_status {
            lines.push(format!("Status: {code}"));
        }

        match &report.result {
            Some(result) => {
                lines.push(format!("Success: {}", display_bool(result.success)));
                lines.push(format!(
                    "Output: {}",
                    result.output.as_deref().unwrap_or("N/A")
                ));
                if !result.is_success() {
                    let error = result
                        .error
                        .as_deref()
                        .or(report.failure.as_deref())
                        .unwrap_or("N/A");
                    lines.push(format!("Error: {error}"));
                }
            }
            None => {
                // Body arrived but was not the expected result object
                lines.push("Success: N/A".to_string());
                lines.push("Output: N/A".to_string());
                lines.push(format!(
                    "Error: {}",
                    report.failure.as_deref().unwrap_or("N/A")
                ));
            }
        }

        lines.join("\n")
    }

    fn format_case_line(&self, report: &CaseReport) -> String {
        let status_str = if self.colorize {
            match report.status {
                CaseStatus::Pass => "\x1b[32m✓ PASS\x1b[0m",
                CaseStatus::Fail => "\x1b[31m✗ FAIL\x1b[0m",
                CaseStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match report.status {
                CaseStatus::Pass => "✓ PASS",
                CaseStatus::Fail => "✗ FAIL",
                CaseStatus::Error => "! ERROR",
            }
        };

        format!(
            "{:2}. {:28} {} [{:>6}ms]",
            report.case.number(),
            report.case.name(),
            status_str,
            report.duration_ms
        )
    }

    fn format_case_brief(&self, report: &CaseReport) -> String {
        format!(
            "{} {} ({}ms)",
            report.status.symbol(),
            report.case.name(),
            report.duration_ms
        )
    }

    /// Format a full run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Console => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        // Header
        output.push_str("\n╔══════════════════════════════════════════════════════════════╗\n");
        output.push_str(&format!(
            "║  Submission suite - {:41} ║\n",
            clip(&summary.endpoint, 41)
        ));
        output.push_str("╠══════════════════════════════════════════════════════════════╣\n");

        // Cases
        for report in &summary.reports {
            output.push_str(&format!("║  {}  ║\n", self.format_case_line(report)));
        }

        // Footer
        output.push_str("╠══════════════════════════════════════════════════════════════╣\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str(&format!(
            "║  Total: {:2} | Pass: {} | Fail: {} | Error: {:2}                     ║\n",
            summary.total, pass_str, fail_str, summary.errors
        ));
        output.push_str(&format!(
            "║  Pass Rate: {:5.1}% | Duration: {:6}ms                      ║\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));
        output.push_str("╚══════════════════════════════════════════════════════════════╝\n");

        output
    }

    fn format_summary_brief(&self, summary: &RunSummary) -> String {
        format!(
            "{}: {}/{} passed ({:.1}%) in {}ms",
            summary.endpoint,
            summary.passed,
            summary.total,
            summary.pass_rate(),
            summary.total_duration_ms
        )
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Console)
    }
}

fn display_bool(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "N/A",
    }
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        format!("{s:max$}")
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecResult, SuiteCase};
    use chrono::Utc;

    fn pass_report() -> CaseReport {
        CaseReport::from_response(
            SuiteCase::PythonQuotes,
            200,
            ExecResult {
                success: Some(true),
                output: Some("Hello World\nLine 2".to_string()),
                error: None,
            },
            12,
        )
    }

    fn fail_report() -> CaseReport {
        CaseReport::from_response(
            SuiteCase::JavaQuotes,
            200,
            ExecResult {
                success: Some(false),
                output: None,
                error: Some("compilation failed: reached end of file".to_string()),
            },
            34,
        )
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_str("CONSOLE"),
            Some(OutputFormat::Console)
        );
        assert_eq!(
            OutputFormat::from_str("json-pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_formatter_creation() {
        let formatter = ReportFormatter::new(OutputFormat::Json).no_color();
        assert_eq!(formatter.format, OutputFormat::Json);
        assert!(!formatter.colorize);
    }

    #[test]
    fn test_console_block_success_has_no_error_line() {
        let formatter = ReportFormatter::new(OutputFormat::Console);
        let block = formatter.format_case(&pass_report());

        assert!(block.contains("=== Testing Python with double quotes ==="));
        assert!(block.contains("Status: 200"));
        assert!(block.contains("Success: true"));
        assert!(block.contains("Output: Hello World\nLine 2"));
        assert!(!block.contains("Error:"));
    }

    #[test]
    fn test_console_block_failure_prints_error_line() {
        let formatter = ReportFormatter::new(OutputFormat::Console);
        let block = formatter.format_case(&fail_report());

        assert!(block.contains("Success: false"));
        assert!(block.contains("Output: N/A"));
        assert!(block.contains("Error: compilation failed: reached end of file"));
    }

    #[test]
    fn test_console_block_missing_success_is_falsy() {
        let report = CaseReport::from_response(
            SuiteCase::BallerinaQuotes,
            200,
            ExecResult {
                success: None,
                output: Some("partial".to_string()),
                error: None,
            },
            7,
        );
        let formatter = ReportFormatter::new(OutputFormat::Console);
        let block = formatter.format_case(&report);

        assert!(block.contains("Success: N/A"));
        assert!(block.contains("Error: N/A"));
    }

    #[test]
    fn test_console_block_transport_failure() {
        let report = CaseReport::from_transport_failure(
            SuiteCase::PythonQuotes,
            "connection refused: tcp connect error",
            0,
        );
        let formatter = ReportFormatter::new(OutputFormat::Console);
        let block = formatter.format_case(&report);

        assert!(block.contains("=== Testing Python with double quotes ==="));
        assert!(block.contains("Request failed: connection refused: tcp connect error"));
        assert!(!block.contains("Status:"));
        assert!(!block.contains("Success:"));
    }

    #[test]
    fn test_console_block_undecodable_body() {
        let report = CaseReport::from_undecodable(
            SuiteCase::JavaQuotes,
            500,
            "invalid result object: expected value at line 1 column 1",
            20,
        );
        let formatter = ReportFormatter::new(OutputFormat::Console);
        let block = formatter.format_case(&report);

        assert!(block.contains("Status: 500"));
        assert!(block.contains("Success: N/A"));
        assert!(block.contains("Error: invalid result object"));
    }

    #[test]
    fn test_json_case_round_trips() {
        let formatter = ReportFormatter::new(OutputFormat::Json);
        let json = formatter.format_case(&pass_report());

        let parsed: CaseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, CaseStatus::Pass);
        assert_eq!(parsed.http_status, Some(200));
    }

    #[test]
    fn test_summary_table_counts() {
        let summary = RunSummary::new(
            "http://localhost:8080/api/submit",
            Utc::now(),
            vec![pass_report(), fail_report()],
        );
        let formatter = ReportFormatter::new(OutputFormat::Console).no_color();
        let table = formatter.format_summary(&summary);

        assert!(table.contains("Total:  2"));
        assert!(table.contains("Pass: 1"));
        assert!(table.contains("Fail: 1"));
        assert!(table.contains("Pass Rate:  50.0%"));
    }

    #[test]
    fn test_summary_brief() {
        let summary = RunSummary::new(
            "http://localhost:8080/api/submit",
            Utc::now(),
            vec![pass_report()],
        );
        let formatter = ReportFormatter::new(OutputFormat::Summary);
        let brief = formatter.format_summary(&summary);

        assert!(brief.contains("1/1 passed"));
        assert!(brief.contains("100.0%"));
    }

    #[test]
    fn test_clip_long_endpoint() {
        let clipped = clip("http://example.com/very/long/path/that/keeps/going/forever", 20);
        assert_eq!(clipped.chars().count(), 20);
        assert!(clipped.ends_with("..."));
    }
}
