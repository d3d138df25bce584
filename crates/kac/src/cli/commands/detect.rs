//! Detect command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use kac_changelog::ParserRegistry;

use crate::cli::{output, read_document, report_error, Cli, OutputFormat};
use crate::exit_codes;

/// Report which changelog dialect a document is written in
#[derive(Debug, Args)]
pub struct DetectCommand {
    /// Changelog to inspect (`-` reads stdin)
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,
}

impl DetectCommand {
    /// Execute the detect command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        info!(file = %self.file.display(), "executing detect command");
        let config = match cli.load_config() {
            Ok(config) => config,
            Err(e) => return Ok(report_error(&e)),
        };
        let registry = match ParserRegistry::from_config(&config.parser) {
            Ok(registry) => registry,
            Err(e) => return Ok(report_error(&e)),
        };

        let document = read_document(&self.file)?;
        let dialect = registry.detect(&document).map(|p| p.name());

        match cli.format {
            OutputFormat::Json => {
                let value = serde_json::json!({ "dialect": dialect });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Text => match dialect {
                Some(name) => println!("{}", name),
                None if !cli.quiet => output::warning("No supported changelog format detected"),
                None => {}
            },
        }

        Ok(match dialect {
            Some(_) => exit_codes::SUCCESS,
            None => exit_codes::NOT_RECOGNIZED,
        })
    }
}
