//! Keep a Changelog dialect
//!
//! Recognizes changelogs following <https://keepachangelog.com/> and hands
//! them to a [`SpecParser`] after rewriting them into the generic grammar.

use kac_core::config::{ParserConfig, DIALECT_KEEP_A_CHANGELOG};
use kac_core::Result;
use tracing::{debug, instrument};

use super::recognizer::looks_like_keep_a_changelog;
use super::transducer::transduce;
use super::validator::has_release_line;
use super::ChangelogParser;
use crate::spec::{GenericSpecParser, SpecParser};
use crate::types::Changelog;

/// Parser for Keep a Changelog markdown
pub struct KeepAChangelogParser {
    spec_parser: Box<dyn SpecParser>,
}

impl KeepAChangelogParser {
    /// Create a parser backed by the built-in generic parser
    pub fn new() -> Self {
        Self {
            spec_parser: Box::new(GenericSpecParser::new()),
        }
    }

    /// Create a parser from configuration
    pub fn with_config(config: &ParserConfig) -> Self {
        Self::new().with_spec_parser(GenericSpecParser::with_config(config))
    }

    /// Use a custom parser for the rewritten text
    pub fn with_spec_parser<P: SpecParser + 'static>(mut self, parser: P) -> Self {
        self.spec_parser = Box::new(parser);
        self
    }

    /// Rewrite a document into generic grammar text.
    ///
    /// Returns `None` when the document is not recognized.
    #[instrument(skip(document), fields(document_len = document.len()))]
    pub fn to_generic_text(document: &str) -> Option<String> {
        if !looks_like_keep_a_changelog(document) {
            debug!(stage = "recognizer", "document not recognized");
            return None;
        }

        let Some(lines) = transduce(document).into_lines() else {
            debug!(stage = "transducer", "no release heading rewritten");
            return None;
        };

        if !has_release_line(&lines) {
            debug!(stage = "validator", "no generic release line produced");
            return None;
        }

        Some(lines.join("\n"))
    }
}

impl Default for KeepAChangelogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogParser for KeepAChangelogParser {
    fn name(&self) -> &'static str {
        DIALECT_KEEP_A_CHANGELOG
    }

    fn recognizes(&self, document: &str) -> bool {
        looks_like_keep_a_changelog(document)
    }

    #[instrument(skip(self, document), fields(document_len = document.len()))]
    fn parse(&self, document: &str) -> Result<Option<Changelog>> {
        let Some(text) = Self::to_generic_text(document) else {
            return Ok(None);
        };
        self.spec_parser.parse_generic_text(&text).map(Some)
    }
}
