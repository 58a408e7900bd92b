//! Testing utilities
//!
//! Helper types for writing tests: a `TestStore` wrapper around a temporary
//! settings store and builders for posts.
//!
//! Only available when compiled with `cfg(test)`.

use crate::client::{Post, Rating};
use crate::store::{DEFAULT_FILTERS, SettingsStore};

/// Wrapper for a temporary settings store that is discarded on drop
///
/// # Examples
/// ```ignore
/// let test_store = TestStore::new();
/// let store = test_store.store();
///
/// store.add_filter("guild", "rating:s").unwrap();
/// // Store is discarded when test_store is dropped
/// ```
pub struct TestStore {
    store: SettingsStore,
}

impl TestStore {
    /// Create a temporary store seeded with the default filter list
    ///
    /// # Panics
    /// Panics if the temporary database cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let store = SettingsStore::temporary(DEFAULT_FILTERS).expect("Failed to open test store");
        Self { store }
    }

    /// Get a reference to the underlying store
    #[must_use]
    pub const fn store(&self) -> &SettingsStore {
        &self.store
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a post with the given id and tag string
#[must_use]
pub fn post(id: u64, rating: Rating, tags: &str) -> Post {
    Post {
        id,
        file_url: Some(format!("https://static1.e621.net/data/{id}.png")),
        rating,
        artist: Vec::new(),
        tags: tags.to_string(),
    }
}
