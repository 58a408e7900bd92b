//! Stored value types

use super::error::StoreError;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Maximum number of tags in a community filter list
pub const MAX_FILTERS: usize = 50;

/// Filter list a community starts with
pub const DEFAULT_FILTERS: [&str; 3] = ["-scat", "-watersport", "-cub"];

/// Per-community flags
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Show a rich embed instead of a plain link
    pub verbose: bool,
    /// Use the split search strategy
    pub split_search: bool,
}

/// Ordered, duplicate-free list of tags applied to every search in a community
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterList {
    tags: Vec<String>,
}

impl FilterList {
    /// Build a list, dropping duplicates and truncating to [`MAX_FILTERS`]
    #[must_use]
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for tag in tags {
            let tag = tag.into();
            if list.tags.len() < MAX_FILTERS && !list.tags.contains(&tag) {
                list.tags.push(tag);
            }
        }
        list
    }

    /// Append a tag
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidTag` for empty or whitespace-containing tags,
    /// `StoreError::FilterLimit` when the list is full, and
    /// `StoreError::FilterExists` when the tag is already present.
    pub fn add(&mut self, tag: &str) -> Result<(), StoreError> {
        if tag.is_empty() || tag.contains(char::is_whitespace) {
            return Err(StoreError::InvalidTag(tag.to_string()));
        }
        if self.tags.len() >= MAX_FILTERS {
            return Err(StoreError::FilterLimit { count: self.tags.len(), max: MAX_FILTERS });
        }
        if self.contains(tag) {
            return Err(StoreError::FilterExists(tag.to_string()));
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Remove a tag
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FilterNotFound` when the tag is not present.
    pub fn remove(&mut self, tag: &str) -> Result<(), StoreError> {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        if self.tags.len() == before {
            return Err(StoreError::FilterNotFound(tag.to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags in alphabetical order, for display
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
