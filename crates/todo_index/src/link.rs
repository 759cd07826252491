// crates/todo_index/src/link.rs

use issue_link::IssueId;
use todo_marker::Span;

/// Replace `range` on `line` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub line: usize,
    pub range: Span,
    pub new_text: String,
}

/// A link that has been computed but not yet written to the document.
///
/// Hand [`PendingLink::edit`] to the host; once the host reports success,
/// pass the whole value to `TodoIndex::confirm_link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLink {
    pub document_id: String,
    pub edit: LineEdit,
    pub issue_id: IssueId,
    /// Keyword of the item being linked.
    pub pattern: String,
    /// Char column where the link token goes.
    pub inserted_at: usize,
    /// Width of the inserted token, trailing space included.
    pub inserted_len: usize,
    /// Span of the keyword once the edit is applied.
    pub new_span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The edit still has to be applied and confirmed.
    Pending(PendingLink),
    /// The item (or its current line) already carries this id; nothing to do.
    AlreadyLinked(String),
    /// The keyword is no longer on the line, usually a stale cache.
    MarkerNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Cached items were updated to the new line.
    Updated,
    /// A rescan already picked the link up.
    AlreadyCurrent,
    /// The item is no longer in the cache; rescan to pick up the edit.
    Stale,
}
