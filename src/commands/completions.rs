//! Shell completion generation

use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::Write;

/// Write completions for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
}

/// Print completions for `shell` to stdout
pub fn execute(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}
