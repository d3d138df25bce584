//! Cheap gate deciding whether a document may be Keep a Changelog

use regex::Regex;
use std::sync::LazyLock;

/// Any line starting like a release heading: `##`, `[`, label, `]`
static RELEASE_HEADING_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^##[ \t]*\[(?:unreleased|[^\]\n]+)\]").expect("Invalid regex")
});

/// Check if any line of the document looks like a release heading.
///
/// Dates and category headings are not required here; stricter checks run
/// after transduction.
pub fn looks_like_keep_a_changelog(document: &str) -> bool {
    RELEASE_HEADING_HINT.is_match(document)
}
