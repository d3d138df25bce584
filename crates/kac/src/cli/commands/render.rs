//! Render command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use kac_changelog::{FormatterRegistry, ParserRegistry};

use crate::cli::{output, read_document, report_error, Cli};
use crate::exit_codes;

/// Parse a changelog and write it back in another format
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Changelog to render (`-` reads stdin)
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,

    /// Target format (defaults to the configured output format)
    #[arg(long, value_name = "FORMAT")]
    pub to: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Execute the render command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        info!(file = %self.file.display(), to = ?self.to, "executing render command");
        let config = match cli.load_config() {
            Ok(config) => config,
            Err(e) => return Ok(report_error(&e)),
        };

        let formatters = FormatterRegistry::with_order(config.parser.release_order);
        let format = self.to.as_deref().unwrap_or(&config.output.format);
        let Some(formatter) = formatters.get(format) else {
            anyhow::bail!(
                "Unknown format '{}' (expected one of: {})",
                format,
                formatters.names().join(", ")
            );
        };

        let registry = match ParserRegistry::from_config(&config.parser) {
            Ok(registry) => registry,
            Err(e) => return Ok(report_error(&e)),
        };
        let document = read_document(&self.file)?;
        let changelog = match registry.parse(&document) {
            Ok(Some(changelog)) => changelog,
            Ok(None) => {
                if !cli.quiet {
                    output::warning(&format!(
                        "{} is not in a supported changelog format",
                        self.file.display()
                    ));
                }
                return Ok(exit_codes::NOT_RECOGNIZED);
            }
            Err(e) => return Ok(report_error(&e)),
        };

        let rendered = formatter.format(&changelog);

        if let Some(path) = &self.output {
            std::fs::write(path, &rendered)?;
            if !cli.quiet {
                output::success(&format!(
                    "{} changelog written to {}",
                    formatter.name(),
                    style(path.display()).cyan()
                ));
            }
        } else {
            print!("{}", rendered);
        }

        Ok(exit_codes::SUCCESS)
    }
}
