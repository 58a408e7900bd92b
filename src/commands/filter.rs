//! Filter list command implementation
//!
//! Adds and deletes tags in a community's filter list, reverts the list to
//! the default one and lists the active filters.

use crate::cli::FilterCommands;
use crate::store::SettingsStore;
use crate::FetchBotError;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use std::io;
use tracing::info;

type Result<T> = std::result::Result<T, FetchBotError>;

/// Execute a filter list command
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the tag is rejected by the filter list
/// or the store cannot be accessed.
pub fn execute(
    store: &SettingsStore,
    community: &str,
    command: &FilterCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        FilterCommands::Add { tag } => {
            let message = add(store, community, tag)?;
            if !quiet {
                println!("{message}");
            }
        }
        FilterCommands::Del { tag: Some(tag), .. } => {
            let message = delete(store, community, tag)?;
            if !quiet {
                println!("{message}");
            }
        }
        FilterCommands::Del { tag: None, force } => {
            if !*force && !quiet && !confirm_reset(community)? {
                println!("Cancelled");
                return Ok(());
            }
            let message = reset(store, community)?;
            if !quiet {
                println!("{message}");
            }
        }
        FilterCommands::List => {
            for line in list(store, community)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Add a tag to the filter list and describe the change
///
/// # Errors
///
/// Returns `FetchBotError::Store` for duplicates, invalid tags or a full list.
pub fn add(store: &SettingsStore, community: &str, tag: &str) -> Result<String> {
    store.add_filter(community, tag)?;
    info!(community, tag, "filter added");
    Ok(format!("Filter '{tag}' added to the filter list."))
}

/// Delete a tag from the filter list and describe the change
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the tag is not in the list.
pub fn delete(store: &SettingsStore, community: &str, tag: &str) -> Result<String> {
    store.remove_filter(community, tag)?;
    info!(community, tag, "filter deleted");
    Ok(format!("Filter '{tag}' removed from the filter list."))
}

/// Revert the filter list to the default list
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the store cannot be written.
pub fn reset(store: &SettingsStore, community: &str) -> Result<String> {
    let list = store.reset_filter_list(community)?;
    info!(community, filters = list.len(), "filter list reset");
    Ok("Filter list reset to default.".to_string())
}

/// Lines describing the active filters, sorted
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the store cannot be read.
pub fn list(store: &SettingsStore, community: &str) -> Result<Vec<String>> {
    let filters = store.filter_list(community)?;
    if filters.is_empty() {
        return Ok(vec!["No filters are applied.".to_string()]);
    }

    let mut lines = vec![format!("{}", "Applied filters:".bold())];
    lines.extend(filters.sorted().into_iter().map(|tag| format!("  {tag}")));
    Ok(lines)
}

fn confirm_reset(community: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Reset the filter list of '{community}' to the default?"))
        .default(false)
        .interact()
        .map_err(|e| FetchBotError::IoError(io::Error::other(e)))
}
