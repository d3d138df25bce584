//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::io::Read;
use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::debug;

use kac_core::config::load_config_or_default;
use kac_core::{Config, KacError};

use commands::{CompletionsCommand, ConvertCommand, DetectCommand, ParseCommand, RenderCommand};

use crate::exit_codes;

/// kac - Keep a Changelog recognizer and converter
#[derive(Debug, Parser)]
#[command(name = "kac")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite a Keep a Changelog document into the generic grammar
    Convert(ConvertCommand),

    /// Parse a changelog and show its releases
    Parse(ParseCommand),

    /// Report which changelog dialect a document is written in
    Detect(DetectCommand),

    /// Parse a changelog and write it back in another format
    Render(RenderCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> anyhow::Result<u8> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Convert(ref cmd) => cmd.execute(&self),
            Commands::Parse(ref cmd) => cmd.execute(&self),
            Commands::Detect(ref cmd) => cmd.execute(&self),
            Commands::Render(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Load configuration from the working directory, or defaults
    pub fn load_config(&self) -> kac_core::Result<Config> {
        let cwd = std::env::current_dir()?;
        let (config, path) = load_config_or_default(&cwd)?;
        debug!(path = ?path, "configuration resolved");
        Ok(config)
    }
}

/// Read a changelog document from a file, or stdin for `-`
pub fn read_document(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut document = String::new();
        std::io::stdin().read_to_string(&mut document)?;
        return Ok(document);
    }

    if !path.exists() {
        anyhow::bail!("Changelog not found: {}", path.display());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Map a library error to an exit code, reporting it on stderr
pub fn report_error(err: &KacError) -> u8 {
    output::error(&err.to_string());
    match err {
        KacError::Config(_) => exit_codes::CONFIG_ERROR,
        KacError::Changelog(_) => exit_codes::PARSE_ERROR,
        _ => exit_codes::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use kac_core::{ChangelogError, ConfigError};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["kac", "detect", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Detect(_)));
    }

    #[test]
    fn test_report_error_codes() {
        let parse_err: KacError = ChangelogError::UnknownFormat("html".to_string()).into();
        assert_eq!(report_error(&parse_err), exit_codes::PARSE_ERROR);

        let config_err: KacError = ConfigError::NotFound("/tmp".into()).into();
        assert_eq!(report_error(&config_err), exit_codes::CONFIG_ERROR);

        assert_eq!(report_error(&KacError::other("boom")), exit_codes::ERROR);
    }

    #[test]
    fn test_read_document_missing() {
        let err = read_document(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(err.to_string().contains("Changelog not found"));
    }
}
