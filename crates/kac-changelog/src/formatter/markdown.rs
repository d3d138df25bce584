//! Keep a Changelog markdown formatter

use kac_core::config::FORMAT_MARKDOWN;
use kac_core::ReleaseOrder;
use tracing::{debug, instrument};

use super::{newest_first, push_entries, ChangelogFormatter};
use crate::types::{Changelog, Release, ReleaseDate};

/// Title used when the changelog has no preamble
const DEFAULT_TITLE: &str = "Changelog";

/// Markdown changelog formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    /// Order of the releases being formatted
    pub order: ReleaseOrder,
}

impl MarkdownFormatter {
    /// Create a formatter for oldest-first changelogs
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order of the releases being formatted
    pub fn with_order(mut self, order: ReleaseOrder) -> Self {
        self.order = order;
        self
    }

    fn heading(release: &Release) -> String {
        if release.is_unreleased() {
            return format!("## [{}]", release.version);
        }
        match release.date {
            ReleaseDate::Date(_) | ReleaseDate::NotReleased => {
                format!("## [{}] - {}", release.version, release.date)
            }
            ReleaseDate::Unknown => format!("## [{}]", release.version),
        }
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelog), fields(release_count = changelog.releases.len()))]
    fn format(&self, changelog: &Changelog) -> String {
        let mut output = String::new();

        // Title
        let (title, intro) = match changelog.preamble.split_first() {
            Some((title, intro)) => (title.as_str(), intro),
            None => (DEFAULT_TITLE, &[][..]),
        };
        output.push_str(&format!("# {}\n", title));
        for line in intro {
            output.push('\n');
            output.push_str(line);
            output.push('\n');
        }

        for release in newest_first(changelog, self.order) {
            output.push_str(&format!("\n{}\n", Self::heading(release)));

            for note in &release.notes {
                output.push_str(&format!("\n{}\n", note));
            }

            for group in &release.groups {
                output.push('\n');
                if let Some(name) = &group.name {
                    output.push_str(&format!("### {}\n\n", name));
                }
                push_entries(&mut output, &group.entries, 0);
            }
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn name(&self) -> &'static str {
        FORMAT_MARKDOWN
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
