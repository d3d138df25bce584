//! Changelog dialect parsing

mod keepachangelog;
pub mod line;
pub mod recognizer;
mod registry;
pub mod transducer;
pub mod validator;

pub use keepachangelog::KeepAChangelogParser;
pub use registry::ParserRegistry;

use kac_core::Result;

use crate::types::Changelog;

/// Trait for changelog dialect parsers
pub trait ChangelogParser: Send + Sync {
    /// Dialect name, as used in configuration
    fn name(&self) -> &'static str;

    /// Cheap check whether the document may be in this dialect
    fn recognizes(&self, document: &str) -> bool;

    /// Parse a document; `Ok(None)` means it is not in this dialect
    fn parse(&self, document: &str) -> Result<Option<Changelog>>;
}
