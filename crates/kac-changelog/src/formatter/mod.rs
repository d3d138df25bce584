//! Changelog formatters

mod generic;
mod markdown;
mod registry;

pub use generic::GenericFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;

use kac_core::ReleaseOrder;

use crate::types::{Changelog, Entry, Release};

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog to string
    fn format(&self, changelog: &Changelog) -> String;

    /// Format name, as used in configuration
    fn name(&self) -> &'static str;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Releases newest first, given the order they are stored in
fn newest_first(changelog: &Changelog, order: ReleaseOrder) -> Vec<&Release> {
    match order {
        ReleaseOrder::OldestFirst => changelog.releases.iter().rev().collect(),
        ReleaseOrder::DocumentOrder => changelog.releases.iter().collect(),
    }
}

/// Write entries as `- text` lines, two spaces of indent per level
fn push_entries(output: &mut String, entries: &[Entry], depth: usize) {
    for entry in entries {
        output.push_str(&"  ".repeat(depth));
        output.push_str("- ");
        output.push_str(&entry.text);
        output.push('\n');
        push_entries(output, &entry.children, depth + 1);
    }
}
