//! e621-fetch - image board search with per-community tag filters
//!
//! This library fetches a single image from an e621-style board for a tag
//! query. Every search is extended with the community's filter list, and
//! when the board's per-request tag limit is in the way, the query can be
//! split: a narrow remote query over-fetches candidates which are then
//! filtered locally.
//!
//! # Modules
//!
//! - [`query`]: merges user and filter tags into the request plan
//! - [`client`]: the remote search endpoint behind the [`client::SearchBackend`] trait
//! - [`fetch`]: selects exactly one post or fails with a [`fetch::FetchError`]
//! - [`store`]: sled-backed per-community settings and filter lists
//! - [`output`]: link and embed presentation
//! - [`commands`]: the command surface driven by [`cli`]

use thiserror::Error;

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod output;
pub mod query;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FetchBotError {
    /// Fetch error; the message is meant for the user as-is
    #[error("{0}")]
    Fetch(#[from] fetch::FetchError),
    /// Settings store error
    #[error("{0}")]
    Store(#[from] store::StoreError),
    /// Search client setup error
    #[error("Search client error: {0}")]
    Client(#[from] client::ClientError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
