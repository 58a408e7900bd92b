//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for e621-fetch using the `clap`
//! crate. The command line stands in for the chat command surface: every
//! command runs on behalf of one community, selected with `--community`.
//!
//! # Commands
//!
//! - **fetch**: newest image matching the tags (alias `e621`)
//! - **random**: random image matching the tags (alias `e621r`)
//! - **filter**: manage the community filter list (add, del, list)
//! - **set**: toggle community settings (verbose, split-search)
//! - **config**: read and write application configuration
//! - **completions**: print shell completions

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Community used when `--community` is not given
pub const DEFAULT_COMMUNITY: &str = "default";

/// Value of a `set` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    /// Enable the setting
    #[value(alias = "true", alias = "enable")]
    On,
    /// Disable the setting
    #[value(alias = "false", alias = "disable")]
    Off,
    /// Flip the current value
    #[default]
    Toggle,
}

impl Toggle {
    /// Resulting value given the current one
    #[must_use]
    pub const fn apply(self, current: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Toggle => !current,
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "e621")]
#[command(about = "Fetch images from e621 with per-community tag filters", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Community whose settings and filters apply
    #[arg(short = 'c', long = "community", global = true, default_value = DEFAULT_COMMUNITY)]
    pub community: String,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long = "debug", global = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch the newest image matching the tags
    #[command(visible_alias = "e621")]
    Fetch {
        /// Tags to search for
        #[arg(value_name = "TAGS", allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Fetch a random image matching the tags
    #[command(visible_alias = "e621r")]
    Random {
        /// Tags to search for
        #[arg(value_name = "TAGS", allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Manage the community filter list
    Filter {
        #[command(subcommand)]
        command: FilterCommands,
    },

    /// Change community settings
    Set {
        #[command(subcommand)]
        command: SetCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Filter list subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FilterCommands {
    /// Add a tag to the filter list (e.g. `filter add rating:s`)
    Add {
        /// Tag applied to every search
        #[arg(allow_hyphen_values = true)]
        tag: String,
    },

    /// Delete a tag from the filter list; without a tag, revert to the default list
    #[command(visible_alias = "rm")]
    Del {
        /// Tag to delete
        #[arg(allow_hyphen_values = true)]
        tag: Option<String>,

        /// Skip confirmation prompt when reverting
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// List the filters applied to the community
    #[command(visible_alias = "ls")]
    List,
}

/// Community settings subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SetCommands {
    /// Show results as a rich embed instead of a plain link
    Verbose {
        #[arg(value_enum, default_value_t = Toggle::Toggle)]
        value: Toggle,
    },

    /// Narrow long tag lists locally when the service rejects them
    SplitSearch {
        #[arg(value_enum, default_value_t = Toggle::Toggle)]
        value: Toggle,
    },

    /// Show the current settings
    Show,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., timeout_secs=10)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., endpoint)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file path
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
