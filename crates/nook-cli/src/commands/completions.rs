//! Shell completion scripts for the `nook` binary

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::CliError;

/// Write the script for `shell` to `output_path`, or to stdout when omitted
pub fn run_completions(shell: Shell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = render_completions(shell);

    match output_path {
        Some(path) => {
            std::fs::write(path, &script)?;
            tracing::debug!(%shell, "Wrote completions to {}", path.display());
            println!("{}", path.display());
        }
        None => io::stdout().lock().write_all(&script)?,
    }
    Ok(())
}

pub fn render_completions(shell: Shell) -> Vec<u8> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut command, name, &mut script);
    script
}
