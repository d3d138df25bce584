//! Line-by-line rewrite of Keep a Changelog markdown into the generic grammar

use tracing::{debug, instrument, trace};

use super::line::LineKind;

/// Result of a single transduction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transduction {
    /// Rewritten lines, in input order
    pub lines: Vec<String>,
    /// Whether at least one release heading was rewritten
    pub recognized: bool,
}

impl Transduction {
    /// Get the rewritten lines if a release heading was seen
    pub fn into_lines(self) -> Option<Vec<String>> {
        self.recognized.then_some(self.lines)
    }
}

/// Rewrite every line of the document.
///
/// Link reference definitions are dropped; every other line yields exactly
/// one output line. A single trailing newline ends the last line rather than
/// opening an empty one.
#[instrument(skip(document), fields(document_len = document.len()))]
pub fn transduce(document: &str) -> Transduction {
    let mut result = Transduction::default();
    let mut dropped = 0usize;

    let document = document.strip_suffix('\n').unwrap_or(document);
    for (index, line) in document.split('\n').enumerate() {
        let kind = LineKind::classify(line);
        trace!(line = index + 1, ?kind, "classified line");

        if kind.is_release() {
            result.recognized = true;
        }

        match kind.rewrite() {
            Some(rewritten) => result.lines.push(rewritten),
            None => dropped += 1,
        }
    }

    debug!(
        output_lines = result.lines.len(),
        dropped,
        recognized = result.recognized,
        "document transduced"
    );
    result
}
