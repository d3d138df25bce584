//! Parser registry

use std::sync::Arc;

use kac_core::config::{ParserConfig, DIALECT_GENERIC, DIALECT_KEEP_A_CHANGELOG};
use kac_core::{ChangelogError, Result};
use tracing::{debug, instrument};

use super::{ChangelogParser, KeepAChangelogParser};
use crate::spec::GenericSpecParser;
use crate::types::Changelog;

/// Registry of available dialect parsers, in detection priority order
pub struct ParserRegistry {
    parsers: Vec<Arc<dyn ChangelogParser>>,
}

impl ParserRegistry {
    /// Create a new registry with all built-in parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![
                Arc::new(KeepAChangelogParser::new()),
                Arc::new(GenericSpecParser::new()),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Create a registry holding the configured dialects in order
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        let mut registry = Self::empty();
        for dialect in &config.dialects {
            match dialect.as_str() {
                DIALECT_KEEP_A_CHANGELOG => {
                    registry.register(KeepAChangelogParser::with_config(config))
                }
                DIALECT_GENERIC => registry.register(GenericSpecParser::with_config(config)),
                other => return Err(ChangelogError::UnknownFormat(other.to_string()).into()),
            }
        }
        Ok(registry)
    }

    /// Register a parser
    pub fn register<P: ChangelogParser + 'static>(&mut self, parser: P) {
        self.parsers.push(Arc::new(parser));
    }

    /// Get parser by dialect name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ChangelogParser>> {
        self.parsers.iter().find(|p| p.name() == name).cloned()
    }

    /// Get all registered parsers
    pub fn all(&self) -> &[Arc<dyn ChangelogParser>] {
        &self.parsers
    }

    /// Find the first parser that recognizes the document
    pub fn detect(&self, document: &str) -> Option<Arc<dyn ChangelogParser>> {
        self.parsers.iter().find(|p| p.recognizes(document)).cloned()
    }

    /// Parse with the first dialect that both recognizes and accepts the document
    #[instrument(skip(self, document), fields(document_len = document.len()))]
    pub fn parse(&self, document: &str) -> Result<Option<Changelog>> {
        for parser in self.parsers.iter().filter(|p| p.recognizes(document)) {
            if let Some(changelog) = parser.parse(document)? {
                debug!(dialect = parser.name(), "changelog parsed");
                return Ok(Some(changelog));
            }
            debug!(dialect = parser.name(), "dialect declined document");
        }
        Ok(None)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
