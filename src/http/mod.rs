//! HTTP client module for the submission harness
//!
//! Provides the transport layer used to post payloads to the endpoint.

mod client;

pub use client::{HttpError, SubmitClient, SubmitResponse};
