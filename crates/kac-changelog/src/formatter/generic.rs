//! Generic grammar formatter

use kac_core::config::FORMAT_GENERIC;
use kac_core::ReleaseOrder;
use tracing::{debug, instrument};

use super::{newest_first, push_entries, ChangelogFormatter};
use crate::types::Changelog;

/// Writes a changelog back in the generic grammar
#[derive(Debug, Clone, Default)]
pub struct GenericFormatter {
    /// Order of the releases being formatted
    pub order: ReleaseOrder,
}

impl GenericFormatter {
    /// Create a formatter for oldest-first changelogs
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order of the releases being formatted
    pub fn with_order(mut self, order: ReleaseOrder) -> Self {
        self.order = order;
        self
    }
}

impl ChangelogFormatter for GenericFormatter {
    #[instrument(skip(self, changelog), fields(release_count = changelog.releases.len()))]
    fn format(&self, changelog: &Changelog) -> String {
        let mut output = String::new();

        for line in &changelog.preamble {
            output.push_str(line);
            output.push('\n');
        }

        for release in newest_first(changelog, self.order) {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("{} {}\n", release.version, release.date));

            for note in &release.notes {
                output.push_str(note);
                output.push('\n');
            }

            for group in &release.groups {
                if let Some(name) = &group.name {
                    output.push_str(&format!("[{}]\n", name));
                }
                push_entries(&mut output, &group.entries, 0);
            }
        }

        debug!(output_len = output.len(), "generic changelog formatted");
        output
    }

    fn name(&self) -> &'static str {
        FORMAT_GENERIC
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{GenericSpecParser, SpecParser};
    use crate::types::{Entry, Group, Release, ReleaseDate};

    fn sample() -> Changelog {
        let mut older = Release::new("1.0.0", "2024-01-01".parse().unwrap());
        let mut added = Group::new("Added");
        let mut entry = Entry::new("Initial release");
        entry.children.push(Entry::new("With docs"));
        added.entries.push(entry);
        older.groups.push(added);

        let mut pending = Release::new("Unreleased", ReleaseDate::NotReleased);
        pending.notes.push("Work in progress.".to_string());
        let mut loose = Group::unnamed();
        loose.entries.push(Entry::new("Loose entry"));
        pending.groups.push(loose);

        Changelog {
            preamble: vec!["Changelog".to_string()],
            releases: vec![older, pending],
        }
    }

    #[test]
    fn test_format_generic() {
        let output = GenericFormatter::new().format(&sample());
        assert_eq!(
            output,
            "Changelog\n\nUnreleased Not Released\nWork in progress.\n- Loose entry\n\n1.0.0 2024-01-01\n[Added]\n- Initial release\n  - With docs\n"
        );
    }

    #[test]
    fn test_generic_output_parses_back() {
        let changelog = sample();
        let output = GenericFormatter::new().format(&changelog);
        let parsed = GenericSpecParser::new().parse_generic_text(&output).unwrap();
        assert_eq!(parsed, changelog);
    }

    #[test]
    fn test_empty_changelog() {
        assert_eq!(GenericFormatter::new().format(&Changelog::default()), "");
    }
}
