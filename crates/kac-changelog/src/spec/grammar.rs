//! Tokens and line shapes of the generic changelog grammar
//!
//! ```text
//! Changelog                  <- preamble
//! Unreleased Not Released    <- release line
//! [Added]                    <- group line
//! - Experimental feature     <- entry line
//! 1.0.0 2024-01-01
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Version label of the pending release
pub const UNRELEASED: &str = "Unreleased";

/// Date token of the pending release
pub const NOT_RELEASED: &str = "Not Released";

/// Date token of a release without a recorded date
pub const UNKNOWN_DATE: &str = "Unknown";

/// `chrono` format of a release date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A release line. Only the line start is anchored; text after the date
/// token is captured as `rest`.
pub(crate) static RELEASE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<version>Unreleased|[\w.]+)\s+(?P<date>\d{4}-\d{2}-\d{2}|Unknown|Not Released)(?P<rest>.*)$",
    )
    .expect("Invalid regex")
});

/// Anything shaped like a release line, valid version token or not
pub(crate) static RELEASE_LIKE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<version>\S+)\s+(?P<date>\d{4}-\d{2}-\d{2}|Unknown|Not Released)\s*$")
        .expect("Invalid regex")
});

/// A group line
pub(crate) static GROUP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?P<name>[^\[\]]+)\]\s*$").expect("Invalid regex")
});

/// Anything bracketed like a group line
pub(crate) static GROUP_LIKE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*\]\s*$").expect("Invalid regex"));

/// An entry line, with its indentation
pub(crate) static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent>[ \t]*)- (?P<text>.+)$").expect("Invalid regex")
});

/// Check if a line starts like a release line
pub fn is_release_line(line: &str) -> bool {
    RELEASE_LINE.is_match(line)
}
