//! Post-transduction sanity check

use crate::spec::grammar::is_release_line;

/// Check if the transduced lines contain at least one generic release line.
pub fn has_release_line<S: AsRef<str>>(lines: &[S]) -> bool {
    lines.iter().any(|line| is_release_line(line.as_ref()))
}
