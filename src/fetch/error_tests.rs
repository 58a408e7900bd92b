//! Unit tests for fetch error types

#[cfg(test)]
mod tests {
    use crate::client::ClientError;
    use crate::fetch::error::FetchError;
    use std::error::Error;

    #[test]
    fn test_remote_error() {
        let error = FetchError::Remote { reason: "Rate limited".to_string(), status: 429 };
        assert_eq!(error.to_string(), "Rate limited (status 429)");
    }

    #[test]
    fn test_no_results_error() {
        let error = FetchError::NoResults { tags: "fox -cub".to_string() };
        assert_eq!(error.to_string(), "Your search terms 'fox -cub' gave no results.");
    }

    #[test]
    fn test_split_search_exhausted_lists_groups() {
        let error = FetchError::SplitSearchExhausted {
            limit: 700,
            special: vec!["rating:s".to_string()],
            normal: vec!["fox".to_string(), "snow".to_string()],
            negative: vec!["cub".to_string()],
        };
        let display = error.to_string();
        assert!(display.contains("700"));
        assert!(display.contains("special: [rating:s]"));
        assert!(display.contains("normal: [fox snow]"));
        assert!(display.contains("negative: [cub]"));
    }

    #[test]
    fn test_transport_from_client_error() {
        let client_error = ClientError::Malformed("expected value".to_string());
        let error: FetchError = client_error.into();

        assert_eq!(error.to_string(), "Malformed response: expected value");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_remote_error_source_none() {
        let error = FetchError::Remote { reason: "x".to_string(), status: 500 };
        assert!(error.source().is_none());
    }

    #[test]
    fn test_no_results_creation() {
        let error = FetchError::NoResults { tags: "a".to_string() };

        match error {
            FetchError::NoResults { tags } => assert_eq!(tags, "a"),
            _ => panic!("Expected NoResults variant"),
        }
    }
}
