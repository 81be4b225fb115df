//! Duplicate commenter removal

use std::collections::HashSet;

use crate::crawler::comment::Comment;

/// Keep the first comment of every display name, in first-seen order
///
/// Two commenters sharing a display name count as one entrant; the resolved
/// identity is not consulted.
///
/// # Example
/// ```
/// use comment_raffle::crawler::Comment;
/// use comment_raffle::lottery::deduplicate;
///
/// let comments = vec![
///     Comment::new("A", "first", "a1", false),
///     Comment::new("B", "hello", "b1", false),
///     Comment::new("A", "again", "a2", true),
/// ];
/// let unique = deduplicate(&comments);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].content, "first");
/// ```
pub fn deduplicate(comments: &[Comment]) -> Vec<Comment> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(comments.len());

    comments
        .iter()
        .filter(|comment| seen.insert(comment.display_name.as_str()))
        .cloned()
        .collect()
}
