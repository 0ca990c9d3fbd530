//! Block rendering.
//!
//! Blocks are only ever added at the end of a file. There is no update or
//! remove.

/// Creates the opening marker for a block.
fn opening_marker(id: &str) -> String {
    format!("# cljup:block:{}", id)
}

/// Creates the closing marker for a block.
fn closing_marker(id: &str) -> String {
    format!("# /cljup:block:{}", id)
}

/// Creates a complete block with markers and content, without a trailing newline.
fn format_block(id: &str, block_content: &str) -> String {
    format!(
        "{}\n{}\n{}",
        opening_marker(id),
        block_content.trim_end_matches('\n'),
        closing_marker(id)
    )
}

/// Returns the exact text to append to `existing` so that it ends with the block.
///
/// A missing final newline is completed and a blank line separates the
/// block from earlier content.
///
/// # Example
/// ```
/// use cljup_blocks::writer::append_text;
///
/// let text = append_text("alias ll='ls -l'", "path", "export PATH=x");
/// assert_eq!(text, "\n\n# cljup:block:path\nexport PATH=x\n# /cljup:block:path\n");
/// ```
pub fn append_text(existing: &str, id: &str, block_content: &str) -> String {
    let separator = if existing.is_empty() || existing.ends_with("\n\n") {
        ""
    } else if existing.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };
    format!("{}{}\n", separator, format_block(id, block_content))
}
