//! Store-specific error types
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`** / **`EncodeError`**: bincode failures on stored values
//! - **`FilterExists`** / **`FilterNotFound`** / **`FilterLimit`**: rejected
//!   filter list edits, reported back to the user as-is

use thiserror::Error;

/// Settings store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Tag already present in the filter list
    #[error("Filter '{0}' is already in the filter list.")]
    FilterExists(String),

    /// Tag not present in the filter list
    #[error("Filter '{0}' does not exist in the filter list.")]
    FilterNotFound(String),

    /// Filter list is full
    #[error("The filter list has reached the maximum number of filters ({count}/{max}).")]
    FilterLimit { count: usize, max: usize },

    /// Tag that cannot be stored (empty or containing whitespace)
    #[error("Invalid filter tag '{0}'")]
    InvalidTag(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
