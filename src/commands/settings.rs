//! Community settings command implementation

use crate::cli::{SetCommands, Toggle};
use crate::store::{Settings, SettingsStore};
use crate::FetchBotError;
use colored::Colorize;
use tracing::info;

type Result<T> = std::result::Result<T, FetchBotError>;

/// Execute a settings command
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the settings cannot be read or saved.
pub fn execute(
    store: &SettingsStore,
    community: &str,
    command: &SetCommands,
    quiet: bool,
) -> Result<()> {
    let message = match command {
        SetCommands::Verbose { value } => set_verbose(store, community, *value)?,
        SetCommands::SplitSearch { value } => set_split_search(store, community, *value)?,
        SetCommands::Show => show(&store.settings(community)?),
    };
    if !quiet {
        println!("{message}");
    }
    Ok(())
}

/// Apply `value` to the verbose flag and describe the result
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the settings cannot be read or saved.
pub fn set_verbose(store: &SettingsStore, community: &str, value: Toggle) -> Result<String> {
    let settings = store.update_settings(community, |s| s.verbose = value.apply(s.verbose))?;
    info!(community, verbose = settings.verbose, "verbose mode changed");
    Ok(if settings.verbose {
        "Verbose mode enabled.".to_string()
    } else {
        "Verbose mode disabled.".to_string()
    })
}

/// Apply `value` to the split search flag and describe the result
///
/// # Errors
///
/// Returns `FetchBotError::Store` if the settings cannot be read or saved.
pub fn set_split_search(store: &SettingsStore, community: &str, value: Toggle) -> Result<String> {
    let settings =
        store.update_settings(community, |s| s.split_search = value.apply(s.split_search))?;
    info!(community, split_search = settings.split_search, "split search changed");
    Ok(if settings.split_search {
        "Split search enabled.".to_string()
    } else {
        "Split search disabled.".to_string()
    })
}

/// Describe the current settings
#[must_use]
pub fn show(settings: &Settings) -> String {
    format!(
        "verbose: {}\nsplit-search: {}",
        on_off(settings.verbose),
        on_off(settings.split_search)
    )
}

fn on_off(value: bool) -> String {
    if value {
        "on".green().to_string()
    } else {
        "off".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestStore;

    #[test]
    fn test_toggle_twice_restores_value() {
        let test_store = TestStore::new();
        let store = test_store.store();

        assert_eq!(
            set_verbose(store, "guild", Toggle::Toggle).unwrap(),
            "Verbose mode enabled."
        );
        assert!(store.settings("guild").unwrap().verbose);
        assert_eq!(
            set_verbose(store, "guild", Toggle::Toggle).unwrap(),
            "Verbose mode disabled."
        );
        assert!(!store.settings("guild").unwrap().verbose);
    }

    #[test]
    fn test_explicit_values() {
        let test_store = TestStore::new();
        let store = test_store.store();

        set_split_search(store, "guild", Toggle::On).unwrap();
        set_split_search(store, "guild", Toggle::On).unwrap();
        assert!(store.settings("guild").unwrap().split_search);

        assert_eq!(
            set_split_search(store, "guild", Toggle::Off).unwrap(),
            "Split search disabled."
        );
        assert!(!store.settings("guild").unwrap().split_search);
    }

    #[test]
    fn test_settings_are_per_community() {
        let test_store = TestStore::new();
        let store = test_store.store();

        set_verbose(store, "a", Toggle::On).unwrap();
        assert!(!store.settings("b").unwrap().verbose);
    }

    #[test]
    fn test_show() {
        colored::control::set_override(false);
        let settings = Settings { verbose: true, split_search: false };
        assert_eq!(show(&settings), "verbose: on\nsplit-search: off");
    }
}
