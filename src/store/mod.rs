//! Persistent per-community settings
//!
//! Provides an explicit store object for community settings and filter
//! lists, using sled as the embedded database backend. Commands receive the
//! store by reference; nothing is kept in global state.
//!
//! Uses two sled trees keyed by community id:
//! - `settings`: community -> [`Settings`]
//! - `filters`: community -> [`FilterList`]
//!
//! A community without a stored filter list reads as the configured default
//! list. Reads never write, so a fetch leaves the store untouched.

use sled::{Db, Tree};
use std::path::Path;
use tracing::debug;

pub mod error;
pub mod types;

pub use error::StoreError;
pub use types::{DEFAULT_FILTERS, FilterList, MAX_FILTERS, Settings};

/// Settings store wrapping the sled trees
pub struct SettingsStore {
    db: Db,
    settings: Tree,
    filters: Tree,
    default_filters: FilterList,
}

impl SettingsStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use e621_fetch::store::{SettingsStore, DEFAULT_FILTERS};
    /// let store = SettingsStore::open("my_store", DEFAULT_FILTERS).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database or its trees cannot be opened.
    pub fn open<P, I, S>(path: P, default_filters: I) -> Result<Self, StoreError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let db = sled::open(path)?;
        Self::from_db(db, FilterList::new(default_filters))
    }

    /// Opens a store that lives only as long as this value
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the temporary database cannot be created.
    pub fn temporary<I, S>(default_filters: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db, FilterList::new(default_filters))
    }

    fn from_db(db: Db, default_filters: FilterList) -> Result<Self, StoreError> {
        let settings = db.open_tree("settings")?;
        let filters = db.open_tree("filters")?;
        Ok(Self { db, settings, filters, default_filters })
    }

    /// Get the settings of a community, defaults if none were saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if database operations or decoding fail.
    pub fn settings(&self, community: &str) -> Result<Settings, StoreError> {
        match self.settings.get(community.as_bytes())? {
            Some(value) => {
                let (settings, _): (Settings, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(settings)
            }
            None => Ok(Settings::default()),
        }
    }

    /// Save the settings of a community
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or database operations fail.
    pub fn save_settings(&self, community: &str, settings: &Settings) -> Result<(), StoreError> {
        let value = bincode::encode_to_vec(settings, bincode::config::standard())?;
        self.settings.insert(community.as_bytes(), value)?;
        debug!(community, ?settings, "saved settings");
        Ok(())
    }

    /// Modify the settings of a community and return the stored result
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if reading or saving fails.
    pub fn update_settings<F>(&self, community: &str, update: F) -> Result<Settings, StoreError>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings(community)?;
        update(&mut settings);
        self.save_settings(community, &settings)?;
        Ok(settings)
    }

    /// Get the filter list of a community, the default list if none was saved
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if database operations or decoding fail.
    pub fn filter_list(&self, community: &str) -> Result<FilterList, StoreError> {
        match self.filters.get(community.as_bytes())? {
            Some(value) => {
                let (list, _): (FilterList, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(list)
            }
            None => Ok(self.default_filters.clone()),
        }
    }

    /// Save the filter list of a community
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or database operations fail.
    pub fn save_filter_list(&self, community: &str, list: &FilterList) -> Result<(), StoreError> {
        let value = bincode::encode_to_vec(list, bincode::config::standard())?;
        self.filters.insert(community.as_bytes(), value)?;
        debug!(community, filters = list.len(), "saved filter list");
        Ok(())
    }

    /// Add a tag to a community's filter list
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the tag is rejected by [`FilterList::add`] or
    /// the store cannot be read or written.
    pub fn add_filter(&self, community: &str, tag: &str) -> Result<FilterList, StoreError> {
        let mut list = self.filter_list(community)?;
        list.add(tag)?;
        self.save_filter_list(community, &list)?;
        Ok(list)
    }

    /// Remove a tag from a community's filter list
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FilterNotFound` if the tag is not in the list, or
    /// another `StoreError` if the store cannot be read or written.
    pub fn remove_filter(&self, community: &str, tag: &str) -> Result<FilterList, StoreError> {
        let mut list = self.filter_list(community)?;
        list.remove(tag)?;
        self.save_filter_list(community, &list)?;
        Ok(list)
    }

    /// Reset a community's filter list to the default list
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be written.
    pub fn reset_filter_list(&self, community: &str) -> Result<FilterList, StoreError> {
        self.filters.remove(community.as_bytes())?;
        debug!(community, "reset filter list");
        Ok(self.default_filters.clone())
    }

    /// Communities with any stored settings or filters
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if database iteration fails.
    pub fn communities(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for tree in [&self.settings, &self.filters] {
            for key in tree.iter().keys() {
                let name = String::from_utf8_lossy(&key?).into_owned();
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }
}
