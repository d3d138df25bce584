//! Parse command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use kac_changelog::{Changelog, Entry, ParserRegistry};

use crate::cli::{output, read_document, report_error, Cli, OutputFormat};
use crate::exit_codes;

/// Parse a changelog and show its releases
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Changelog to parse (`-` reads stdin)
    #[arg(default_value = "CHANGELOG.md")]
    pub file: PathBuf,

    /// Only show this release
    #[arg(long = "release", value_name = "VERSION")]
    pub release: Option<String>,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<u8> {
        info!(file = %self.file.display(), release = ?self.release, "executing parse command");
        let config = match cli.load_config() {
            Ok(config) => config,
            Err(e) => return Ok(report_error(&e)),
        };
        let document = read_document(&self.file)?;

        let registry = match ParserRegistry::from_config(&config.parser) {
            Ok(registry) => registry,
            Err(e) => return Ok(report_error(&e)),
        };
        let mut changelog = match registry.parse(&document) {
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

        if let Some(version) = &self.release {
            changelog.releases.retain(|r| &r.version == version);
            if changelog.releases.is_empty() {
                anyhow::bail!("Release not found: {}", version);
            }
        }

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changelog)?),
            OutputFormat::Text => print_summary(&changelog, cli.verbose),
        }

        Ok(exit_codes::SUCCESS)
    }
}

fn print_summary(changelog: &Changelog, verbose: bool) {
    if let Some(title) = changelog.preamble.first() {
        println!("{}", output::header(title));
    }

    for release in &changelog.releases {
        println!();
        println!(
            "{} ({})",
            output::version_style().apply_to(&release.version),
            release.date
        );
        println!("{}", output::key_value("entries", &release.entry_count().to_string()));

        for group in &release.groups {
            let name = group.name.as_deref().unwrap_or("(ungrouped)");
            println!(
                "  {} {}",
                output::group_style().apply_to(name),
                group.entry_count()
            );
            if verbose {
                print_entries(&group.entries, 2);
            }
        }
    }
}

fn print_entries(entries: &[Entry], depth: usize) {
    for entry in entries {
        println!("{}- {}", "  ".repeat(depth), entry.text);
        print_entries(&entry.children, depth + 1);
    }
}
