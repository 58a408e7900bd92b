//! Fetch-specific error types
//!
//! Every variant is terminal for the invocation: nothing is retried, and the
//! display text is what the user sees.
//!
//! # Error Types
//!
//! - **`Transport`**: the request never produced an understood response
//! - **`Remote`**: the service answered with a failure and a reason
//! - **`NoResults`**: the query matched nothing
//! - **`SplitSearchExhausted`**: no over-fetched candidate passed the local filter

use crate::client::ClientError;
use thiserror::Error;

/// Errors produced while selecting a result
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure or unreadable response body
    #[error("{0}")]
    Transport(#[from] ClientError),

    /// Failure reported by the search service
    #[error("{reason} (status {status})")]
    Remote { reason: String, status: u16 },

    /// The query matched nothing
    #[error("Your search terms '{tags}' gave no results.")]
    NoResults { tags: String },

    /// The over-fetch yielded no candidate passing the residual filter
    #[error(
        "None of the {limit} fetched candidates matched all tags (special: [{}], normal: [{}], negative: [{}]). Try a narrower filter.",
        .special.join(" "),
        .normal.join(" "),
        .negative.join(" ")
    )]
    SplitSearchExhausted {
        limit: usize,
        special: Vec<String>,
        normal: Vec<String>,
        negative: Vec<String>,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
