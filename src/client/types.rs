//! Response types for the remote search endpoint

use super::error::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content rating of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "s")]
    Safe,
    #[serde(rename = "q")]
    Questionable,
    #[serde(rename = "e")]
    Explicit,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Rating {
    /// Human-readable rating word
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Questionable => "questionable",
            Self::Explicit => "explicit",
            Self::Unknown => "unknown",
        }
    }

    /// Embed color as an RGB value
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Safe => 0x00FF00,
            Self::Questionable => 0xFF9900,
            Self::Explicit => 0xFF0000,
            Self::Unknown => 0xFFFFFF,
        }
    }
}

/// A single search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub artist: Vec<String>,
    /// Space-delimited tag string
    #[serde(default)]
    pub tags: String,
}

/// Outcome of a search request that reached the service and was understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    /// Posts in the service's own order
    Posts(Vec<Post>),
    /// The service reported a failure
    Failure { reason: String, status: u16 },
}

/// Key whose presence marks an error object
pub const FAILURE_KEY: &str = "success";

/// Key of the post list in the wrapped response form
pub const POSTS_KEY: &str = "posts";

#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

impl SearchResponse {
    /// Interpret a decoded body received with HTTP `status`
    ///
    /// An array is a post list, an object carrying [`FAILURE_KEY`] is a
    /// service failure and an object carrying [`POSTS_KEY`] is a wrapped post
    /// list. Posts are decoded one by one so an error names the bad record.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Malformed` for any other shape or for a record
    /// that does not decode.
    pub fn from_value(value: Value, status: u16) -> Result<Self, ClientError> {
        match value {
            Value::Array(items) => decode_posts(items).map(Self::Posts),
            Value::Object(map) if map.contains_key(FAILURE_KEY) => {
                let failure: FailureBody = serde_json::from_value(Value::Object(map))?;
                Ok(Self::Failure {
                    reason: failure
                        .message
                        .or(failure.reason)
                        .unwrap_or_else(|| "Unknown error".to_string()),
                    status,
                })
            }
            Value::Object(mut map) if map.contains_key(POSTS_KEY) => match map.remove(POSTS_KEY) {
                Some(Value::Array(items)) => decode_posts(items).map(Self::Posts),
                _ => Err(ClientError::Malformed(format!("'{POSTS_KEY}' is not an array"))),
            },
            Value::Object(_) => Err(ClientError::Malformed(format!(
                "object without '{FAILURE_KEY}' or '{POSTS_KEY}'"
            ))),
            other => Err(ClientError::Malformed(format!(
                "expected a post list or an error object, found {}",
                value_kind(&other)
            ))),
        }
    }
}

fn decode_posts(items: Vec<Value>) -> Result<Vec<Post>, ClientError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| ClientError::Malformed(format!("post {index}: {e}")))
        })
        .collect()
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialize() {
        let post: Post = serde_json::from_str(
            r#"{"id": 42, "file_url": "https://static.example/a.png", "rating": "q",
                "artist": ["some_artist"], "tags": "fox solo", "score": 10}"#,
        )
        .unwrap();
        assert_eq!(post.id, 42);
        assert_eq!(post.rating, Rating::Questionable);
        assert_eq!(post.artist, vec!["some_artist"]);
        assert_eq!(post.tags, "fox solo");
    }

    #[test]
    fn test_post_missing_optional_fields() {
        let post: Post = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(post.file_url, None);
        assert_eq!(post.rating, Rating::Unknown);
        assert!(post.artist.is_empty());
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_unknown_rating() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "rating": "x"}"#).unwrap();
        assert_eq!(post.rating, Rating::Unknown);
    }

    #[test]
    fn test_rating_labels_and_colors() {
        assert_eq!(Rating::Safe.label(), "safe");
        assert_eq!(Rating::Questionable.label(), "questionable");
        assert_eq!(Rating::Explicit.label(), "explicit");
        assert_eq!(Rating::Safe.color(), 0x00FF00);
        assert_eq!(Rating::Questionable.color(), 0xFF9900);
        assert_eq!(Rating::Explicit.color(), 0xFF0000);
        assert_eq!(Rating::Unknown.color(), 0xFFFFFF);
    }

    fn response(body: &str, status: u16) -> Result<SearchResponse, ClientError> {
        SearchResponse::from_value(serde_json::from_str(body).unwrap(), status)
    }

    #[test]
    fn test_failure_prefers_message() {
        assert_eq!(
            response(r#"{"success": false, "message": "Too many tags", "reason": "x"}"#, 422).unwrap(),
            SearchResponse::Failure { reason: "Too many tags".into(), status: 422 }
        );
    }

    #[test]
    fn test_failure_falls_back_to_reason() {
        assert!(matches!(
            response(r#"{"success": false, "reason": "down"}"#, 503).unwrap(),
            SearchResponse::Failure { reason, status: 503 } if reason == "down"
        ));
    }

    #[test]
    fn test_failure_without_text() {
        assert_eq!(
            response(r#"{"success": false}"#, 500).unwrap(),
            SearchResponse::Failure { reason: "Unknown error".into(), status: 500 }
        );
    }

    #[test]
    fn test_wrapped_posts() {
        let SearchResponse::Posts(posts) = response(r#"{"posts": [{"id": 3}]}"#, 200).unwrap() else {
            panic!("Expected posts");
        };
        assert_eq!(posts[0].id, 3);
    }

    #[test]
    fn test_invalid_record_is_malformed() {
        let err = response(r#"[{"id": "abc", "tags": "fox"}]"#, 200).unwrap_err();
        match err {
            ClientError::Malformed(msg) => {
                assert!(msg.starts_with("post 0: invalid type: string \"abc\""), "{msg}");
            }
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_error_names_bad_record() {
        let err = response(r#"[{"id": 1, "tags": "fox"}, {"id": 2, "artist": null, "tags": "fox"}]"#, 200)
            .unwrap_err();
        match err {
            ClientError::Malformed(msg) => {
                assert!(msg.starts_with("post 1: invalid type: null"), "{msg}");
                assert!(msg.contains("sequence"), "{msg}");
            }
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_records_are_malformed() {
        let err = response("[1, 2, 3]", 200).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(ref msg) if msg.starts_with("post 0: invalid type: integer")));
    }

    #[test]
    fn test_unknown_object_is_malformed() {
        let err = response(r#"{"hello": 1}"#, 200).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(ref msg) if msg.contains("'success' or 'posts'")));
    }

    #[test]
    fn test_wrapped_posts_must_be_array() {
        assert!(matches!(response(r#"{"posts": 5}"#, 200), Err(ClientError::Malformed(_))));
    }

    #[test]
    fn test_scalar_body_is_malformed() {
        let err = response("42", 200).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(ref msg) if msg.ends_with("found a number")));
    }
}
