use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;

pub fn run_completions(shell: Shell, output_path: Option<&Path>) -> Result<(), CliError> {
    match output_path {
        Some(path) => {
            let mut file = File::create(path)?;
            write_completions(shell, &mut file);
            file.flush()?;
            tracing::info!(%shell, path = %path.display(), "Wrote completion script");
            println!("{}", path.display());
        }
        None => write_completions(shell, &mut io::stdout().lock()),
    }

    Ok(())
}

/// Write the completion script for `shell`, named after the binary.
pub fn write_completions(shell: Shell, out: &mut impl Write) {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    generate(shell, &mut command, bin_name, out);
}
