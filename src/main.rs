//! runner-smoke - Submission Endpoint Smoke-Test Harness
//!
//! A CLI tool that posts a small suite of code submissions to an execution
//! endpoint and reports, case by case, what came back.
//!
//! ## Features
//!
//! - 3 suite cases covering double-quoted strings in Python, Java, Ballerina
//! - Sequential submission with a per-case console block
//! - Multiple output formats (console, JSON, summary)
//! - Base64 payload encoding helpers
//!
//! ## Usage
//!
//! ```bash
//! # Run the full suite against the default endpoint
//! runner-smoke
//!
//! # Run against a different endpoint
//! runner-smoke run --url http://10.0.0.5:8080/api/submit
//!
//! # Run a single case
//! runner-smoke run --case 2
//!
//! # List suite cases with their source
//! runner-smoke list --detailed
//!
//! # Encode a payload
//! runner-smoke encode --sample java
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod encode;
mod harness;
mod http;
mod models;
mod output;

use cli::Args;
use config::{EnvConfig, HarnessConfig};
use encode::SampleSnippet;
use harness::SuiteRunner;
use models::{RunSummary, SuiteCase};
use output::{OutputFormat, ReportFormatter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose || EnvConfig::load().verbose.unwrap_or(false) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Diagnostics go to stderr; stdout carries only the report output
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Some(cli::Command::Run(run_args)) => {
            run_suite(run_args).await?;
        }
        Some(cli::Command::List(list_args)) => {
            list_cases(list_args);
        }
        Some(cli::Command::Encode(encode_args)) => {
            encode_payload(encode_args)?;
        }
        Some(cli::Command::Env) => {
            config::env::print_env_help();
        }
        None => {
            run_suite(cli::RunArgs::default()).await?;
        }
    }

    Ok(())
}

async fn run_suite(args: cli::RunArgs) -> Result<()> {
    let config = HarnessConfig::resolve(args.url.as_deref(), args.timeout);
    let cases = select_cases(args.case, args.name.as_deref())?;

    let format_name = args.format.or_else(|| EnvConfig::load().format);
    let format = match format_name.as_deref() {
        Some(name) => OutputFormat::from_str(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown output format: {name}"))?,
        None => OutputFormat::Console,
    };
    let formatter = ReportFormatter::new(format);

    info!(
        "Submitting {} case(s) to {}",
        cases.len(),
        config.endpoint
    );

    let runner = SuiteRunner::new(config)?;

    let summary = match format {
        OutputFormat::Console | OutputFormat::Summary => {
            // Stream each case as it completes, then the run summary
            let started_at = chrono::Utc::now();
            let mut reports = Vec::with_capacity(cases.len());

            for case in &cases {
                let report = runner.run_case(*case).await;
                println!("{}", formatter.format_case(&report));
                reports.push(report);
            }

            let summary = RunSummary::new(runner.endpoint(), started_at, reports);
            println!("{}", formatter.format_summary(&summary));
            summary
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            // One document for the whole run
            let summary = runner.run_cases(&cases).await;
            println!("{}", formatter.format_summary(&summary));
            summary
        }
    };

    if args.check && !summary.is_all_passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn select_cases(number: Option<u8>, name: Option<&str>) -> Result<Vec<SuiteCase>> {
    match (number, name) {
        (Some(n), _) => {
            let case = SuiteCase::from_number(n)
                .ok_or_else(|| anyhow::anyhow!("Invalid case number: {n}"))?;
            Ok(vec![case])
        }
        (None, Some(name)) => {
            let case = SuiteCase::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown case: {name}"))?;
            Ok(vec![case])
        }
        (None, None) => Ok(SuiteCase::all()),
    }
}

fn list_cases(args: cli::ListArgs) {
    let cases = SuiteCase::all();

    println!("\nSubmission Suite Cases ({} total)\n", cases.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for case in cases {
        println!(
            "  {:2}. {:28} [{}]",
            case.number(),
            case.name(),
            case.language()
        );

        if args.detailed {
            for line in case.source().lines() {
                println!("      {line}");
            }
            println!();
        }
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn encode_payload(args: cli::EncodeArgs) -> Result<()> {
    if let Some(path) = &args.file {
        println!("{}", encode::encode_file(path)?);
        return Ok(());
    }

    if let Some(text) = &args.text {
        println!("{}", encode::encode_source(text));
        return Ok(());
    }

    let snippet = match &args.sample {
        Some(name) => SampleSnippet::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown sample: {name}"))?,
        None => SampleSnippet::PythonBubbleSort,
    };

    info!("Encoding sample {}", snippet.name());
    println!("{}", encode::encode_source(snippet.source()));

    Ok(())
}
