//! Shell completions command

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::{output, Cli};
use crate::exit_codes;

/// Print a completion script for `kac`
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        info!(shell = %self.shell, output = ?self.output, "executing completions command");

        match &self.output {
            Some(path) => {
                let mut file = std::fs::File::create(path)?;
                self.write_script(&mut file);
                if !cli.quiet {
                    output::success(&format!("Completions written to {}", path.display()));
                }
            }
            None => self.write_script(&mut io::stdout()),
        }

        Ok(exit_codes::SUCCESS)
    }

    fn write_script(&self, out: &mut dyn Write) {
        generate(self.shell, &mut Cli::command(), "kac", out);
    }
}
