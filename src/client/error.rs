//! Transport-level error types for the search client
//!
//! These cover everything that prevents a request from producing a
//! [`SearchResponse`](super::SearchResponse): building the HTTP client, an
//! invalid endpoint, network failures and bodies that cannot be understood.
//! Failures reported by the service itself are not errors at this level.

use thiserror::Error;

/// Search client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured endpoint is not a valid URL
    #[error("Invalid endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),

    /// The HTTP client could not be built or the request failed in flight
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not a recognised search response
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
