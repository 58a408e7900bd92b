//! Configuration module for e621-fetch
//!
//! Manages application configuration: the search endpoint, request
//! behaviour, where the settings store lives and the filter list new
//! communities start with. Configuration is stored in the user's config
//! directory and can be overridden with `E621_FETCH_*` environment variables
//! (e.g. `E621_FETCH_TIMEOUT_SECS=10`).

use crate::store::DEFAULT_FILTERS;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment variables overriding configuration keys
pub const ENV_PREFIX: &str = "E621_FETCH";

/// Keys accepted by [`AppConfig::get`] and [`AppConfig::set`]
pub const CONFIG_KEYS: [&str; 7] = [
    "endpoint",
    "post_url_base",
    "user_agent",
    "timeout_secs",
    "store_path",
    "default_filters",
    "quiet",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Search endpoint answering `?limit=N&tags=...`
    pub endpoint: String,

    /// Base of post page links; the post id is appended
    pub post_url_base: String,

    /// `User-Agent` sent with every request
    pub user_agent: String,

    /// Upper bound for a single request, in seconds
    pub timeout_secs: u64,

    /// Settings store location (defaults to the user's data directory)
    pub store_path: Option<PathBuf>,

    /// Filter list a community starts with
    pub default_filters: Vec<String>,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://e621.net/post/index.json".to_string(),
            post_url_base: "https://e621.net/post/show".to_string(),
            user_agent: format!("e621-fetch/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            store_path: None,
            default_filters: DEFAULT_FILTERS.iter().map(|s| (*s).to_string()).collect(),
            quiet: false,
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("e621-fetch").join("config.toml"))
    }

    /// Load configuration from `path`, creating a default file if missing.
    /// Environment variables take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("default_filters"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolved settings store location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn resolved_store_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("e621-fetch").join("store"))
    }

    /// Read a configuration value as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "endpoint" => self.endpoint.clone(),
            "post_url_base" => self.post_url_base.clone(),
            "user_agent" => self.user_agent.clone(),
            "timeout_secs" => self.timeout_secs.to_string(),
            "store_path" => self
                .store_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "default_filters" => self.default_filters.join(","),
            "quiet" => self.quiet.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a configuration value from text (does not save)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and
    /// `ConfigError::Message` for values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "endpoint" => self.endpoint = value.to_string(),
            "post_url_base" => self.post_url_base = value.trim_end_matches('/').to_string(),
            "user_agent" => self.user_agent = value.to_string(),
            "timeout_secs" => {
                self.timeout_secs = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for timeout_secs: '{value}'. Use a whole number of seconds"
                    ))
                })?;
            }
            "store_path" => {
                self.store_path = if value.is_empty() { None } else { Some(PathBuf::from(value)) };
            }
            "default_filters" => {
                self.default_filters = value
                    .split([',', ' '])
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::NotFound(format!(
        "'{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
