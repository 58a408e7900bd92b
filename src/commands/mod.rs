//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation for one community.

pub mod completions;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod settings;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use config::execute as config;
pub use fetch::execute as fetch;
pub use filter::execute as filter;
pub use settings::execute as settings;
