//! Rendering of raw comment tokens attached to syntax nodes.

use itertools::Itertools;

use crate::ast::Comment;

/// Renders each comment on its own line: `prefix` (the indentation), the
/// comment text, then `sep`. An empty token list renders as the empty
/// string.
pub(crate) fn format_comments(comments: &[Comment], sep: &str, prefix: &str) -> String {
    let mut buf = String::new();
    for comment in comments {
        buf.push_str(prefix);
        buf.push_str(comment.text.trim_end());
        buf.push_str(sep);
    }
    buf
}

/// Renders trailing comments joined by single spaces, without any padding;
/// the line model decides the column they start at.
pub(crate) fn format_trailing(comments: &[Comment]) -> String {
    comments.iter().map(|comment| comment.text.trim()).join(" ")
}
