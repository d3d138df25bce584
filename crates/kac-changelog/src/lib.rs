//! kac Changelog - Keep a Changelog recognition and parsing
//!
//! Keep a Changelog markdown is recognized line by line, rewritten into a
//! simpler generic changelog grammar, and handed to a [`SpecParser`] that
//! builds the [`Changelog`] object model.
//!
//! ```
//! let document = "# Changelog\n\n## [Unreleased]\n\n### Added\n- Experimental feature\n";
//! let changelog = kac_changelog::parse(document).unwrap().unwrap();
//! assert_eq!(changelog.releases[0].version, "Unreleased");
//! ```

pub mod formatter;
pub mod parser;
pub mod spec;
pub mod types;

pub use formatter::{ChangelogFormatter, FormatterRegistry, GenericFormatter, MarkdownFormatter};
pub use parser::{ChangelogParser, KeepAChangelogParser, ParserRegistry};
pub use spec::{GenericSpecParser, SpecParser};
pub use types::{Changelog, Entry, Group, Release, ReleaseDate};

/// Parse a Keep a Changelog document with the built-in generic parser.
///
/// Returns `Ok(None)` when the document is not recognized.
pub fn parse(document: &str) -> kac_core::Result<Option<Changelog>> {
    KeepAChangelogParser::new().parse(document)
}

/// Rewrite a Keep a Changelog document into generic grammar text.
///
/// Returns `None` when the document is not recognized.
pub fn to_generic_text(document: &str) -> Option<String> {
    KeepAChangelogParser::to_generic_text(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_documents() {
        for document in [
            "",
            "Just some notes",
            "# Changelog\n\n### Added\n- no releases",
            "v1.0.0 (2024-01-01)\n- Initial release",
        ] {
            assert!(parse(document).unwrap().is_none(), "{document:?}");
            assert!(to_generic_text(document).is_none());
        }
    }

    #[test]
    fn test_line_order_preserved() {
        let document = "# T\nfirst\n[a]: https://a\n## [1.0.0]\nsecond\n[b]: https://b\n* third";
        let text = to_generic_text(document).unwrap();
        assert_eq!(text, "T\nfirst\n1.0.0 Unknown\nsecond\n- third");
    }
}
