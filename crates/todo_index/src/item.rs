// crates/todo_index/src/item.rs

use classify_priority::{classify_priority, Priority};
use extract_context_snippet::extract_context_snippet;
use issue_link::extract_issue_id;
use serde::Serialize;
use todo_marker::{char_len, MarkerMatch, Span};

/// One marker occurrence in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    /// Whole line, trimmed, as it was when the item was detected.
    pub text: String,
    /// The configured keyword that matched.
    pub pattern: String,
    /// Zero-based line index.
    pub line_number: usize,
    /// Char columns of the keyword token (and its optional colon).
    pub span: Span,
    /// Logical path of the owning document.
    pub file: String,
    pub priority: Priority,
    /// Surrounding lines, see `extract_context_snippet`.
    pub context: String,
    /// Tracker id carried by a link token on the line, if any.
    pub linked_issue_id: Option<String>,
}

impl TodoItem {
    pub(crate) fn detect<S: AsRef<str>>(
        file: &str,
        lines: &[S],
        line_number: usize,
        found: MarkerMatch,
    ) -> Self {
        let line = lines[line_number].as_ref();
        debug_assert!(
            !found.span.is_empty() && found.span.end <= char_len(line),
            "marker span {:?} outside line {} of {}",
            found.span,
            line_number,
            file
        );

        let text = line.trim().to_string();
        Self {
            priority: classify_priority(&found.pattern, &text),
            linked_issue_id: extract_issue_id(&text),
            context: extract_context_snippet(lines, line_number),
            text,
            pattern: found.pattern,
            line_number,
            span: found.span,
            file: file.to_string(),
        }
    }

    pub fn is_linked(&self) -> bool {
        self.linked_issue_id.is_some()
    }

    /// One-based line number, as shown to people.
    pub fn display_line(&self) -> usize {
        self.line_number + 1
    }
}
