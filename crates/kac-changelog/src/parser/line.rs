//! Line classification for Keep a Changelog documents

use regex::Regex;
use std::sync::LazyLock;

use crate::spec::grammar::{NOT_RELEASED, UNKNOWN_DATE, UNRELEASED};

/// `[label]: url`
static LINK_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[[^\]]+\]:\s+\S.*$").expect("Invalid regex"));

/// `## [label]`, `## [label] - YYYY-MM-DD` or `## [label] - Not Released`
static RELEASE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^##\s+\[(?P<label>[^\]]+)\](?:\s+-\s+(?P<date>\d{4}-\d{2}-\d{2}|Not Released))?\s*$",
    )
    .expect("Invalid regex")
});

/// `### Name`
static CATEGORY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(?P<name>\S.*?)\s*$").expect("Invalid regex"));

/// `# Title`
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+(?P<text>\S.*)$").expect("Invalid regex"));

/// `- text` or `* text`, with optional indentation
static BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent>\s*)[-*] (?P<text>.+)$").expect("Invalid regex")
});

/// Label inside the brackets of a release heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseLabel<'a> {
    /// The pending release
    Unreleased,
    /// A released version
    Version(&'a str),
}

impl<'a> ReleaseLabel<'a> {
    fn parse(label: &'a str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case(UNRELEASED) {
            Self::Unreleased
        } else {
            Self::Version(label)
        }
    }
}

/// A classified line of a Keep a Changelog document.
///
/// Variants are listed in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Link reference definition, dropped from the output
    LinkReference,
    /// Release heading
    ReleaseHeading {
        label: ReleaseLabel<'a>,
        date: Option<&'a str>,
    },
    /// Category heading (Added, Fixed, ...)
    CategoryHeading { name: &'a str },
    /// Document title
    Title { text: &'a str },
    /// List item
    Bullet { indent: &'a str, text: &'a str },
    /// Anything else, passed through
    Opaque { text: &'a str },
}

impl<'a> LineKind<'a> {
    /// Classify a single line. A trailing carriage return is ignored.
    pub fn classify(line: &'a str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if LINK_REFERENCE.is_match(line) {
            return Self::LinkReference;
        }

        if let Some(caps) = RELEASE_HEADING.captures(line) {
            return Self::ReleaseHeading {
                label: ReleaseLabel::parse(caps.name("label").map_or("", |m| m.as_str())),
                date: caps.name("date").map(|m| m.as_str()),
            };
        }

        if let Some(name) = CATEGORY_HEADING.captures(line).and_then(|c| c.name("name")) {
            return Self::CategoryHeading {
                name: name.as_str(),
            };
        }

        if let Some(text) = TITLE.captures(line).and_then(|c| c.name("text")) {
            return Self::Title {
                text: text.as_str(),
            };
        }

        if let Some(caps) = BULLET.captures(line) {
            if let (Some(indent), Some(text)) = (caps.name("indent"), caps.name("text")) {
                return Self::Bullet {
                    indent: indent.as_str(),
                    text: text.as_str(),
                };
            }
        }

        Self::Opaque { text: line }
    }

    /// Check if this line is a release heading
    pub fn is_release(&self) -> bool {
        matches!(self, Self::ReleaseHeading { .. })
    }

    /// Rewrite the line into the generic grammar; `None` drops it.
    pub fn rewrite(&self) -> Option<String> {
        match *self {
            Self::LinkReference => None,
            Self::ReleaseHeading {
                label: ReleaseLabel::Unreleased,
                ..
            } => Some(format!("{} {}", UNRELEASED, NOT_RELEASED)),
            Self::ReleaseHeading {
                label: ReleaseLabel::Version(version),
                date,
            } => Some(format!("{} {}", version, date.unwrap_or(UNKNOWN_DATE))),
            Self::CategoryHeading { name } => Some(format!("[{}]", name)),
            Self::Title { text } => Some(text.to_string()),
            Self::Bullet { indent, text } => Some(format!("{}- {}", indent, text)),
            Self::Opaque { text } => Some(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rewrite(line: &str) -> Option<String> {
        LineKind::classify(line).rewrite()
    }

    #[test]
    fn test_unreleased_heading() {
        assert_eq!(rewrite("## [Unreleased]").as_deref(), Some("Unreleased Not Released"));
        assert_eq!(rewrite("## [unreleased]").as_deref(), Some("Unreleased Not Released"));
        assert_eq!(
            rewrite("## [UNRELEASED] - 2024-05-01").as_deref(),
            Some("Unreleased Not Released")
        );
    }

    #[test]
    fn test_release_heading_dates() {
        assert_eq!(rewrite("## [1.0.0]").as_deref(), Some("1.0.0 Unknown"));
        assert_eq!(
            rewrite("## [1.0.0] - 2024-01-01").as_deref(),
            Some("1.0.0 2024-01-01")
        );
        assert_eq!(rewrite("##   [0.3.1]   ").as_deref(), Some("0.3.1 Unknown"));
        assert_eq!(
            rewrite("## [1.2.0] - Not Released").as_deref(),
            Some("1.2.0 Not Released")
        );
    }

    #[test]
    fn test_release_heading_classification() {
        assert_eq!(
            LineKind::classify("## [2.1.0] - 2023-11-30"),
            LineKind::ReleaseHeading {
                label: ReleaseLabel::Version("2.1.0"),
                date: Some("2023-11-30"),
            }
        );
        assert!(LineKind::classify("## [1.0.0]").is_release());
    }

    #[test]
    fn test_release_heading_with_malformed_date_is_opaque() {
        let kind = LineKind::classify("## [1.0.0] - Jan 1st");
        assert_eq!(kind, LineKind::Opaque { text: "## [1.0.0] - Jan 1st" });
        assert!(!LineKind::classify("##[1.0.0]").is_release());
    }

    #[test]
    fn test_category_heading() {
        assert_eq!(rewrite("### Added").as_deref(), Some("[Added]"));
        assert_eq!(rewrite("###   Security fixes!  ").as_deref(), Some("[Security fixes!]"));
        assert_eq!(rewrite("###").as_deref(), Some("###"));
    }

    #[test]
    fn test_title() {
        assert_eq!(rewrite("# Changelog").as_deref(), Some("Changelog"));
        assert_eq!(
            LineKind::classify("## Notes"),
            LineKind::Opaque { text: "## Notes" }
        );
    }

    #[test]
    fn test_link_references_are_dropped() {
        assert_eq!(
            rewrite("[Unreleased]: https://github.com/o/r/compare/v1.0.0...HEAD"),
            None
        );
        assert_eq!(rewrite("  [1.0.0]: https://example.com"), None);
        assert_eq!(rewrite("[1.0.0]:"), Some("[1.0.0]:".to_string()));
    }

    proptest! {
        #[test]
        fn test_any_link_reference_is_dropped(
            indent in "[ \t]{0,4}",
            label in "[^\\]\n]{1,20}",
            url in "\\S{1,30}",
        ) {
            let line = format!("{indent}[{label}]: {url}");
            prop_assert_eq!(LineKind::classify(&line), LineKind::LinkReference);
            prop_assert_eq!(rewrite(&line), None);
        }
    }

    #[test]
    fn test_bullets_normalized() {
        assert_eq!(rewrite("  * text").as_deref(), Some("  - text"));
        assert_eq!(rewrite("  - text").as_deref(), Some("  - text"));
        assert_eq!(rewrite("* top").as_deref(), Some("- top"));
        assert_eq!(rewrite("\t- tabbed").as_deref(), Some("\t- tabbed"));
    }

    #[test]
    fn test_bullet_linking_to_reference_is_kept() {
        assert_eq!(
            rewrite("- [#12]: fixed crash").as_deref(),
            Some("- [#12]: fixed crash")
        );
    }

    #[test]
    fn test_carriage_return_stripped() {
        assert_eq!(rewrite("## [1.0.0]\r").as_deref(), Some("1.0.0 Unknown"));
        assert_eq!(rewrite("plain\r").as_deref(), Some("plain"));
    }

    #[test]
    fn test_opaque_lines_pass_through() {
        assert_eq!(rewrite("").as_deref(), Some(""));
        assert_eq!(rewrite("Some prose.").as_deref(), Some("Some prose."));
        assert_eq!(rewrite("---").as_deref(), Some("---"));
    }
}
