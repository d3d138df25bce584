//! Generic changelog grammar and its parser

mod generic;
pub mod grammar;

pub use generic::GenericSpecParser;

use kac_core::Result;

use crate::types::Changelog;

/// Parses text written in the generic changelog grammar.
///
/// Dialect parsers rewrite their input into this grammar and hand it over
/// through this trait, so any implementation can stand in for the built-in
/// [`GenericSpecParser`].
pub trait SpecParser: Send + Sync {
    /// Parse generic grammar text into a changelog
    fn parse_generic_text(&self, text: &str) -> Result<Changelog>;
}
