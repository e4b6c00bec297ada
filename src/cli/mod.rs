//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Submission endpoint smoke-test harness
#[derive(Parser, Debug)]
#[command(name = "runner-smoke")]
#[command(version = "0.2.1")]
#[command(about = "Smoke-test a code-execution submission endpoint")]
#[command(long_about = None)]
pub struct Args {
    /// Defaults to a full suite run when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the submission suite against an endpoint
    Run(RunArgs),

    /// List the suite cases
    List(ListArgs),

    /// Base64-encode a source payload
    Encode(EncodeArgs),

    /// Show environment variable configuration
    Env,
}

/// Arguments for run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Endpoint URL to submit to
    #[arg(short, long)]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Specific case number to run (1-3)
    #[arg(short, long)]
    pub case: Option<u8>,

    /// Specific case by name (e.g. "python")
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output format (console, json, json-pretty, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Exit non-zero when any case does not pass
    #[arg(long)]
    pub check: bool,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show case source code
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for encode command
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Built-in sample to encode (python, java)
    #[arg(short, long)]
    pub sample: Option<String>,

    /// File whose contents to encode
    #[arg(short, long)]
    pub file: Option<String>,

    /// Literal text to encode
    #[arg(short, long)]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["runner-smoke", "list", "--detailed"]);
        match args.command {
            Some(Command::List(list_args)) => {
                assert!(list_args.detailed);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_run_args() {
        let args = Args::parse_from([
            "runner-smoke",
            "run",
            "--url",
            "http://10.0.0.5:8080/api/submit",
            "--case",
            "2",
            "--check",
        ]);
        match args.command {
            Some(Command::Run(run_args)) => {
                assert_eq!(
                    run_args.url.as_deref(),
                    Some("http://10.0.0.5:8080/api/submit")
                );
                assert_eq!(run_args.case, Some(2));
                assert!(run_args.check);
                assert_eq!(run_args.timeout, None);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let args = Args::parse_from(["runner-smoke"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_encode_args() {
        let args = Args::parse_from(["runner-smoke", "encode", "--sample", "java"]);
        match args.command {
            Some(Command::Encode(encode_args)) => {
                assert_eq!(encode_args.sample.as_deref(), Some("java"));
                assert_eq!(encode_args.file, None);
            }
            _ => panic!("Expected Encode command"),
        }
    }

    #[test]
    fn test_global_verbose() {
        let args = Args::parse_from(["runner-smoke", "run", "--verbose"]);
        assert!(args.verbose);
    }
}
