//! Configuration command implementation

use crate::cli::ConfigCommands;
use crate::config::AppConfig;
use crate::FetchBotError;
use std::path::Path;

type Result<T> = std::result::Result<T, FetchBotError>;

/// Execute a configuration command against the file at `path`
///
/// # Errors
///
/// Returns `FetchBotError::InvalidInput` for a malformed `key=value` and
/// `FetchBotError::ConfigError` for unknown keys, invalid values or a file
/// that cannot be written.
pub fn execute(
    mut config: AppConfig,
    path: &Path,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set(key, value)?;
            config.save_to(path)?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// Split `key=value`, trimming both sides
///
/// # Errors
///
/// Returns `FetchBotError::InvalidInput` if there is no `=` or the key is empty.
pub fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    match setting.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(FetchBotError::InvalidInput(
            "Invalid format. Use: e621 config set key=value".into(),
        )),
    }
}
