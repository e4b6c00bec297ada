//! Submission pass execution
//!
//! Runs the built-in suite against the endpoint, strictly one case at a time.

mod runner;

pub use runner::SuiteRunner;
