//! HTTP client for endpoint submissions
//!
//! Thin transport layer: posts one payload, returns the raw response. How the
//! body is interpreted is the harness's business, not the client's.

#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::Submission;

/// Transport-level errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Client for posting submissions
#[derive(Clone)]
pub struct SubmitClient {
    client: Client,
    timeout_secs: u64,
}

impl SubmitClient {
    /// Create a new client with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(30)
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Post one submission to the endpoint.
    ///
    /// Issues exactly one request; callers own any continue-on-failure policy.
    pub async fn submit(&self, url: &str, submission: &Submission) -> Result<SubmitResponse> {
        debug!("Posting {} submission to {}", submission.language, url);

        let start = std::time::Instant::now();

        let response = self
            .client
            .post(url)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    anyhow::anyhow!(HttpError::Timeout(self.timeout_secs))
                } else if e.is_connect() {
                    anyhow::anyhow!(HttpError::ConnectionRefused(url.to_string()))
                } else if e.is_builder() {
                    anyhow::anyhow!(HttpError::InvalidUrl(url.to_string()))
                } else {
                    anyhow::anyhow!(HttpError::RequestFailed(e.to_string()))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        let duration_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(SubmitResponse {
            status_code: status.as_u16(),
            body,
            duration_ms,
        })
    }
}

/// Raw response to a submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status_code: u16,
    pub body: String,
    pub duration_ms: u64,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
