//! Plain-text transcript of a comment thread for terminal output

use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;

use crate::crawler::comment::Comment;

/// Emoticon markup such as `[face001]` or `[face]emoji:002.png[/face]`
static FACE_MARKUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[face[^\]]*\]").unwrap());

/// Remove platform emoticon markup from comment text
///
/// # Example
/// ```
/// use comment_raffle::transcript::strip_face_markup;
///
/// assert_eq!(strip_face_markup("hi[face001]"), "hi");
/// ```
pub fn strip_face_markup(content: &str) -> String {
    FACE_MARKUP_REGEX.replace_all(content, "").into_owned()
}

/// Render one numbered transcript entry (1-based index)
pub fn render_entry(index: usize, comment: &Comment) -> String {
    let content = strip_face_markup(&comment.content);

    if comment.is_reply {
        format!("{index:04} | reply   | {}\n      > {content}\n", comment.display_name)
    } else {
        format!("{index:04} | comment | {}\n      {content}\n", comment.display_name)
    }
}

/// Write the whole transcript followed by a completion line
pub fn write_transcript<W: Write>(out: &mut W, comments: &[Comment]) -> io::Result<()> {
    for (i, comment) in comments.iter().enumerate() {
        writeln!(out, "{}", render_entry(i + 1, comment))?;
    }
    writeln!(out, "=== All {} comments listed ===", comments.len())
}
