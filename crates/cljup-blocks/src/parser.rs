//! Marker detection in run-commands files.
//!
//! Blocks look like:
//! ```text
//! # cljup:block:ID
//! export PATH="$HOME/.clojure/bin:$PATH"
//! # /cljup:block:ID
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Opening marker on a line of its own. Leading whitespace is tolerated so
/// blocks survive being indented by hand.
static OPEN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*# cljup:block:([a-zA-Z0-9_-]+)\s*$").expect("Invalid open marker regex")
});

/// Ids must be usable verbatim inside a marker line.
pub(crate) fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Checks whether the opening marker for `id` is present.
///
/// Presence of the opening marker alone counts: a block whose closing
/// marker was deleted by hand must still not be written twice.
///
/// # Example
/// ```
/// use cljup_blocks::parser::has_block;
///
/// let content = "# cljup:block:path\nexport PATH=x\n# /cljup:block:path";
///
/// assert!(has_block(content, "path"));
/// assert!(!has_block(content, "clj-new"));
/// ```
pub fn has_block(content: &str, id: &str) -> bool {
    content.lines().any(|line| {
        OPEN_MARKER_REGEX
            .captures(line)
            .is_some_and(|caps| &caps[1] == id)
    })
}
