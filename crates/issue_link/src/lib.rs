// crates/issue_link/src/lib.rs

//! The link token that ties a marker line to an external tracker issue.
//!
//! The token is persisted in the source text itself, so its shape is
//! fixed: `[<KEY>-<NUMBER>]` right before the marker keyword, where `KEY`
//! is uppercase ASCII letters and `NUMBER` is decimal digits:
//!
//! ```text
//! // [ABC-123] TODO: fix this
//! ```

mod issue_id;

pub use issue_id::{IssueId, IssueIdError};

use once_cell::sync::Lazy;
use regex::Regex;
use todo_marker::{byte_offset, Marker, Span};

static LINK_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([A-Z]+-[0-9]+)\]").unwrap());

/// Returns the `KEY-NUMBER` of the first link token found anywhere on
/// `line`.
pub fn extract_issue_id(line: &str) -> Option<String> {
    LINK_TOKEN_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Result of placing a link token on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    /// The full rewritten line.
    pub line: String,
    /// Char column where the token (and its trailing space) was inserted.
    pub inserted_at: usize,
    /// Width in chars of the inserted text.
    pub inserted_len: usize,
    /// Span of the marker keyword token inside the rewritten line.
    pub marker_span: Span,
}

/// Inserts `[issue_id] ` in front of the first word-bounded occurrence of
/// `pattern` on `line`. Everything else on the line, including the colon
/// and spacing after the keyword, is kept as it was.
///
/// Returns `None` when `pattern` is not a usable keyword or does not occur
/// on the line.
pub fn rewrite_line(line: &str, pattern: &str, issue_id: &IssueId) -> Option<LinkRewrite> {
    let span = Marker::new(pattern)?.find_in(line)?;
    let byte_at = byte_offset(line, span.start);
    let token = format!("[{}] ", issue_id);

    let mut rewritten = String::with_capacity(line.len() + token.len());
    rewritten.push_str(&line[..byte_at]);
    rewritten.push_str(&token);
    rewritten.push_str(&line[byte_at..]);

    Some(LinkRewrite {
        line: rewritten,
        inserted_at: span.start,
        inserted_len: token.chars().count(),
        marker_span: span.shifted(token.chars().count()),
    })
}

/// Like [`rewrite_line`] but only returns the new text; when the keyword
/// cannot be found the input comes back unchanged.
///
/// Callers must not inject into a line that already carries a token; the
/// todo index checks [`extract_issue_id`] first.
pub fn inject_issue_id(line: &str, pattern: &str, issue_id: &IssueId) -> String {
    rewrite_line(line, pattern, issue_id)
        .map(|rewrite| rewrite.line)
        .unwrap_or_else(|| line.to_string())
}
