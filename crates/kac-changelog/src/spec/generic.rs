//! Parser for the generic changelog grammar

use kac_core::config::{ParserConfig, DIALECT_GENERIC};
use kac_core::{ChangelogError, ReleaseOrder, Result};
use tracing::{debug, instrument, trace};

use super::grammar::{
    is_release_line, ENTRY_LINE, GROUP_LIKE_LINE, GROUP_LINE, RELEASE_LIKE_LINE, RELEASE_LINE,
};
use super::SpecParser;
use crate::parser::ChangelogParser;
use crate::types::{Changelog, Entry, Group, Release, ReleaseDate};

/// Built-in parser for the generic changelog grammar
#[derive(Debug, Clone, Default)]
pub struct GenericSpecParser {
    release_order: ReleaseOrder,
}

impl GenericSpecParser {
    /// Create a parser returning releases oldest first
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from configuration
    pub fn with_config(config: &ParserConfig) -> Self {
        Self::new().with_order(config.release_order)
    }

    /// Set the order of returned releases
    pub fn with_order(mut self, order: ReleaseOrder) -> Self {
        self.release_order = order;
        self
    }
}

impl SpecParser for GenericSpecParser {
    #[instrument(skip(self, text), fields(text_len = text.len(), order = ?self.release_order))]
    fn parse_generic_text(&self, text: &str) -> Result<Changelog> {
        let mut builder = Builder::default();

        for (index, raw) in text.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            builder.push_line(index + 1, line)?;
        }

        let mut changelog = builder.finish();
        if self.release_order == ReleaseOrder::OldestFirst {
            changelog.releases.reverse();
        }

        debug!(
            release_count = changelog.releases.len(),
            preamble_lines = changelog.preamble.len(),
            "generic changelog parsed"
        );
        Ok(changelog)
    }
}

impl ChangelogParser for GenericSpecParser {
    fn name(&self) -> &'static str {
        DIALECT_GENERIC
    }

    fn recognizes(&self, document: &str) -> bool {
        document
            .lines()
            .any(|line| is_release_line(line.strip_suffix('\r').unwrap_or(line)))
    }

    fn parse(&self, document: &str) -> Result<Option<Changelog>> {
        if !self.recognizes(document) {
            return Ok(None);
        }
        self.parse_generic_text(document).map(Some)
    }
}

/// Accumulates releases in document order
#[derive(Default)]
struct Builder {
    preamble: Vec<String>,
    releases: Vec<Release>,
    current: Option<Release>,
    /// Indent widths of the entries on the path to the last entry
    indents: Vec<usize>,
}

impl Builder {
    fn push_line(&mut self, number: usize, line: &str) -> Result<()> {
        if let Some(caps) = RELEASE_LINE.captures(line) {
            let version = &caps["version"];
            let token = &caps["date"];
            let date = token.parse::<ReleaseDate>().map_err(|_| ChangelogError::InvalidDate {
                line: number,
                value: token.to_string(),
            })?;
            trace!(line = number, version, "release line");
            let mut release = Release::new(version, date);
            let rest = caps["rest"].trim();
            if !rest.is_empty() {
                release.notes.push(rest.to_string());
            }
            self.start_release(release);
            return Ok(());
        }

        let Some(release) = self.current.as_mut() else {
            if RELEASE_LIKE_LINE.is_match(line) {
                return Err(malformed_release(number, line));
            }
            if !line.trim().is_empty() {
                self.preamble.push(line.to_string());
            }
            return Ok(());
        };

        if let Some(caps) = ENTRY_LINE.captures(line) {
            let width = caps["indent"].len();
            push_entry(release, &mut self.indents, width, Entry::new(&caps["text"]));
        } else if let Some(caps) = GROUP_LINE.captures(line) {
            release.groups.push(Group::new(&caps["name"]));
            self.indents.clear();
        } else if RELEASE_LIKE_LINE.is_match(line) {
            return Err(malformed_release(number, line));
        } else if GROUP_LIKE_LINE.is_match(line) {
            return Err(ChangelogError::MalformedGroup {
                line: number,
                content: line.to_string(),
            }
            .into());
        } else if !line.trim().is_empty() {
            release.notes.push(line.trim_end().to_string());
        }

        Ok(())
    }

    fn start_release(&mut self, release: Release) {
        if let Some(done) = self.current.replace(release) {
            self.releases.push(done);
        }
        self.indents.clear();
    }

    fn finish(mut self) -> Changelog {
        if let Some(done) = self.current.take() {
            self.releases.push(done);
        }
        Changelog {
            preamble: self.preamble,
            releases: self.releases,
        }
    }
}

fn malformed_release(number: usize, line: &str) -> kac_core::KacError {
    ChangelogError::MalformedRelease {
        line: number,
        content: line.to_string(),
    }
    .into()
}

/// Insert an entry under the last entry that is less indented than it.
fn push_entry(release: &mut Release, indents: &mut Vec<usize>, width: usize, entry: Entry) {
    if release.groups.is_empty() {
        release.groups.push(Group::unnamed());
    }
    let Some(group) = release.groups.last_mut() else {
        return;
    };

    while indents.last().is_some_and(|&top| top >= width) {
        indents.pop();
    }

    let mut siblings = &mut group.entries;
    for _ in 0..indents.len() {
        if siblings.is_empty() {
            break;
        }
        let last = siblings.len() - 1;
        siblings = &mut siblings[last].children;
    }
    siblings.push(entry);
    indents.push(width);
}
