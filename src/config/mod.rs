//! Configuration module
//!
//! The endpoint and timeout are built-in constants; flags and environment
//! variables may override them. There is no configuration file.

#![allow(dead_code)]

pub mod env;

pub use env::EnvConfig;

/// Endpoint the harness posts to when nothing overrides it
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/submit";

/// Request timeout when nothing overrides it
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Effective harness configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Full URL of the submission endpoint
    pub endpoint: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Resolve the effective configuration.
    ///
    /// Precedence: explicit flag, then environment variable, then constant.
    pub fn resolve(flag_endpoint: Option<&str>, flag_timeout: Option<u64>) -> Self {
        let env = EnvConfig::load();

        let endpoint = flag_endpoint
            .map(|s| s.to_string())
            .or(env.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = flag_timeout
            .or(env.timeout)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            endpoint,
            timeout_secs,
        }
    }
}
