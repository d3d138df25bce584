//! Convert command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use kac_changelog::KeepAChangelogParser;

use crate::cli::{output, read_document, Cli, OutputFormat};
use crate::exit_codes;

/// Rewrite a Keep a Changelog document into the generic grammar
#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Changelog to convert (`-` reads stdin)
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ConvertCommand {
    /// Execute the convert command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        info!(file = %self.file.display(), output = ?self.output, "executing convert command");
        let document = read_document(&self.file)?;

        let Some(text) = KeepAChangelogParser::to_generic_text(&document) else {
            if !cli.quiet {
                output::warning(&format!(
                    "{} is not a Keep a Changelog document",
                    self.file.display()
                ));
            }
            return Ok(exit_codes::NOT_RECOGNIZED);
        };

        if let Some(path) = &self.output {
            std::fs::write(path, &text)?;
            if !cli.quiet {
                output::success(&format!(
                    "Generic changelog written to {}",
                    style(path.display()).cyan()
                ));
            }
            return Ok(exit_codes::SUCCESS);
        }

        match cli.format {
            OutputFormat::Json => {
                let value = serde_json::json!({ "text": text });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => println!("{}", text),
        }

        Ok(exit_codes::SUCCESS)
    }
}
