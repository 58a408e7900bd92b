//! Mock search backend for testing

use super::error::ClientError;
use super::types::{Post, SearchResponse};
use super::SearchBackend;
use crate::query::TagSet;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request observed by [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Space-delimited tag string as it would be sent
    pub tags: String,
    pub limit: usize,
}

/// Canned reply served by [`MockBackend`]
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(SearchResponse),
    /// Simulated transport failure carrying this message
    TransportFailure(String),
}

/// Mock backend that returns predetermined replies in order
///
/// When the queue runs dry, an empty post list is returned.
#[derive(Debug, Default)]
pub struct MockBackend {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend answering the next request with `posts`
    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let backend = Self::new();
        backend.push(MockReply::Response(SearchResponse::Posts(posts)));
        backend
    }

    /// Backend answering the next request with a service failure
    #[must_use]
    pub fn with_failure(reason: &str, status: u16) -> Self {
        let backend = Self::new();
        backend.push(MockReply::Response(SearchResponse::Failure {
            reason: reason.to_string(),
            status,
        }));
        backend
    }

    /// Backend failing the next request in transport
    #[must_use]
    pub fn with_transport_failure(message: &str) -> Self {
        let backend = Self::new();
        backend.push(MockReply::TransportFailure(message.to_string()));
        backend
    }

    /// Queue another reply
    pub fn push(&self, reply: MockReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Requests received so far
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    async fn search(&self, tags: &TagSet, limit: usize) -> Result<SearchResponse, ClientError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest { tags: tags.to_string(), limit });
        }

        let reply = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::TransportFailure(message)) => Err(ClientError::Malformed(message)),
            None => Ok(SearchResponse::Posts(Vec::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_queued_posts() {
        let post = Post {
            id: 9,
            file_url: None,
            rating: crate::client::Rating::Safe,
            artist: Vec::new(),
            tags: "fox".to_string(),
        };
        let backend = MockBackend::with_posts(vec![post.clone()]);
        let tags: TagSet = ["fox"].into_iter().collect();

        let response = backend.search(&tags, 1).await.unwrap();
        assert_eq!(response, SearchResponse::Posts(vec![post]));

        let requests = backend.requests();
        assert_eq!(requests, vec![RecordedRequest { tags: "fox".to_string(), limit: 1 }]);
    }

    #[tokio::test]
    async fn test_mock_empty_when_exhausted() {
        let backend = MockBackend::new();
        let response = backend.search(&TagSet::new(), 5).await.unwrap();
        assert_eq!(response, SearchResponse::Posts(Vec::new()));
    }

    #[tokio::test]
    async fn test_mock_transport_failure() {
        let backend = MockBackend::with_transport_failure("connection reset");
        let err = backend.search(&TagSet::new(), 1).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
