//! Remote search endpoint access
//!
//! [`SearchBackend`] is the seam between result selection and the network.
//! [`HttpSearchClient`] talks to a real board over HTTP; [`MockBackend`]
//! serves canned responses and records every request for tests.
//!
//! The endpoint answers a `GET ?limit=N&tags=...` with either a JSON array of
//! posts or a JSON object carrying a `success` key and a human-readable
//! reason. Both shapes are folded into [`SearchResponse`] here so callers
//! never inspect raw JSON.

pub mod error;
pub mod mock;
pub mod types;

pub use error::ClientError;
pub use mock::MockBackend;
pub use types::{Post, Rating, SearchResponse};

use crate::config::AppConfig;
use crate::query::TagSet;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// A service able to answer tag searches
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search request
    ///
    /// # Errors
    ///
    /// Returns `ClientError` when the request cannot be sent or the response
    /// body cannot be understood.
    async fn search(&self, tags: &TagSet, limit: usize) -> Result<SearchResponse, ClientError>;
}

/// HTTP implementation of [`SearchBackend`]
///
/// Every request is a single attempt bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    endpoint: Url,
}

impl HttpSearchClient {
    /// Create a client for `endpoint`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidEndpoint` if the endpoint does not parse,
    /// or `ClientError::Request` if the HTTP client cannot be built.
    pub fn new(endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Self, ClientError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ClientError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Create a client from the application configuration
    ///
    /// # Errors
    ///
    /// See [`HttpSearchClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.endpoint,
            &config.user_agent,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Full request URL for a search
    #[must_use]
    pub fn search_url(&self, tags: &TagSet, limit: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("tags", &tags.to_string());
        url
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search(&self, tags: &TagSet, limit: usize) -> Result<SearchResponse, ClientError> {
        let url = self.search_url(tags, limit);
        debug!(%url, "sending search request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_body(&body, status.as_u16())
    }
}

/// Interpret a response body received with HTTP `status`
///
/// A body that is not a recognised shape is a transport failure on a
/// successful status, and a service failure carrying the status otherwise.
///
/// # Errors
///
/// Returns `ClientError::Malformed` for unrecognised bodies on 2xx statuses,
/// carrying the underlying decode message.
pub fn parse_body(body: &str, status: u16) -> Result<SearchResponse, ClientError> {
    let parsed = serde_json::from_str::<serde_json::Value>(body)
        .map_err(ClientError::from)
        .and_then(|value| SearchResponse::from_value(value, status));

    match parsed {
        Ok(response) => Ok(response),
        Err(e) if (200..300).contains(&status) => {
            warn!(status, error = %e, "search endpoint returned a malformed body");
            Err(e)
        }
        Err(e) => {
            warn!(status, error = %e, "search endpoint returned an unrecognised error body");
            let reason = reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unexpected response")
                .to_string();
            Ok(SearchResponse::Failure { reason, status })
        }
    }
}
