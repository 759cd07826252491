// crates/todo_index/src/index.rs

use anyhow::{Context, Result};
use classify_priority::classify_priority;
use extract_context_snippet::patch_snippet;
use issue_link::{extract_issue_id, rewrite_line, IssueId};
use log::{debug, trace};
use std::collections::HashMap;
use todo_marker::{char_len, line_has_marker, scan_line, MarkerSet, Span};

use crate::host::{EditSink, SourceDocument};
use crate::item::TodoItem;
use crate::link::{ConfirmOutcome, LineEdit, LinkOutcome, PendingLink};

/// Cache of scanned items, keyed by logical document path.
///
/// Items of one document are kept in ascending `(line_number, span.start)`
/// order. Lookups return the first match in that order.
#[derive(Debug, Default)]
pub struct TodoIndex {
    documents: HashMap<String, Vec<TodoItem>>,
}

impl TodoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans every line of a document and replaces its cached entry with
    /// the result.
    pub fn scan<S: AsRef<str>>(
        &mut self,
        document_id: &str,
        lines: &[S],
        markers: &MarkerSet,
    ) -> &[TodoItem] {
        let mut items = Vec::new();
        for (line_number, line) in lines.iter().enumerate() {
            for found in scan_line(line.as_ref(), markers) {
                items.push(TodoItem::detect(document_id, lines, line_number, found));
            }
        }
        debug!(
            "scanned {} ({} lines, {} markers): {} item(s)",
            document_id,
            lines.len(),
            markers.len(),
            items.len()
        );

        let entry = self.documents.entry(document_id.to_string()).or_default();
        *entry = items;
        entry.as_slice()
    }

    /// [`TodoIndex::scan`] over a host document.
    pub fn scan_document<D>(&mut self, document: &D, markers: &MarkerSet) -> &[TodoItem]
    where
        D: SourceDocument + ?Sized,
    {
        let lines: Vec<&str> = (0..document.line_count())
            .map(|i| document.line_text(i).unwrap_or(""))
            .collect();
        self.scan(document.path(), &lines, markers)
    }

    /// Items from the last scan, or nothing if the document was never scanned.
    pub fn get(&self, document_id: &str) -> &[TodoItem] {
        self.documents
            .get(document_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First item on `line` whose span contains `column`.
    pub fn find_at(&self, document_id: &str, line: usize, column: usize) -> Option<&TodoItem> {
        self.get(document_id)
            .iter()
            .find(|item| item.line_number == line && item.span.contains(column))
    }

    /// First item on `line`, whatever the column.
    pub fn find_on_line(&self, document_id: &str, line: usize) -> Option<&TodoItem> {
        self.get(document_id)
            .iter()
            .find(|item| item.line_number == line)
    }

    pub fn count(&self, document_id: &str) -> usize {
        self.get(document_id).len()
    }

    /// Lookup used for hovers: exact position first, then anything on the
    /// line. If both miss but the line visibly carries a marker, the
    /// document has not been scanned since it changed, so rescan it once
    /// and retry the line lookup.
    pub fn resolve_at<D>(
        &mut self,
        document: &D,
        line: usize,
        column: usize,
        markers: &MarkerSet,
    ) -> Option<&TodoItem>
    where
        D: SourceDocument + ?Sized,
    {
        let document_id = document.path();
        if self.find_at(document_id, line, column).is_some() {
            return self.find_at(document_id, line, column);
        }
        if self.find_on_line(document_id, line).is_none() {
            let visible = document
                .line_text(line)
                .map(|text| line_has_marker(text, markers))
                .unwrap_or(false);
            if !visible {
                return None;
            }
            trace!("{}:{} has a marker but no cached item; rescanning", document_id, line + 1);
            self.scan_document(document, markers);
        }
        self.find_on_line(document_id, line)
    }

    /// First phase of linking `item` to `issue_id`.
    ///
    /// `line_text` is the current, untrimmed text of the item's line. Returns
    /// the whole-line edit the host has to apply; the cache is not touched
    /// until [`TodoIndex::confirm_link`] is called.
    pub fn link(
        &self,
        document_id: &str,
        item: &TodoItem,
        issue_id: &IssueId,
        line_text: &str,
    ) -> LinkOutcome {
        if let Some(existing) = item
            .linked_issue_id
            .clone()
            .or_else(|| extract_issue_id(line_text))
        {
            debug!(
                "{}:{} already linked to {}",
                document_id,
                item.display_line(),
                existing
            );
            return LinkOutcome::AlreadyLinked(existing);
        }

        let Some(rewrite) = rewrite_line(line_text, &item.pattern, issue_id) else {
            debug!(
                "{}:{} no longer contains {}",
                document_id,
                item.display_line(),
                item.pattern
            );
            return LinkOutcome::MarkerNotFound;
        };

        trace!(
            "{}:{} link rewrite {:?} -> {:?}",
            document_id,
            item.display_line(),
            line_text,
            rewrite.line
        );
        LinkOutcome::Pending(PendingLink {
            document_id: document_id.to_string(),
            edit: LineEdit {
                line: item.line_number,
                range: Span::new(0, char_len(line_text)),
                new_text: rewrite.line,
            },
            issue_id: issue_id.clone(),
            pattern: item.pattern.clone(),
            inserted_at: rewrite.inserted_at,
            inserted_len: rewrite.inserted_len,
            new_span: rewrite.marker_span,
        })
    }

    /// Second phase of linking: call only after the host has applied
    /// `pending.edit`. Brings every cached item on the edited line (text,
    /// span, link, priority) and every context snippet showing that line in
    /// line with the new text.
    pub fn confirm_link(&mut self, pending: &PendingLink) -> ConfirmOutcome {
        let Some(items) = self.documents.get_mut(&pending.document_id) else {
            return ConfirmOutcome::Stale;
        };
        let line = pending.edit.line;
        let Some(target) = items
            .iter()
            .position(|item| item.line_number == line && item.pattern == pending.pattern)
        else {
            return ConfirmOutcome::Stale;
        };
        match items[target].linked_issue_id.as_deref() {
            Some(id) if id == pending.issue_id.as_str() => return ConfirmOutcome::AlreadyCurrent,
            Some(_) => return ConfirmOutcome::Stale,
            None => {}
        }

        let new_line = pending.edit.new_text.as_str();
        let text = new_line.trim().to_string();
        let linked = extract_issue_id(&text);
        for item in items.iter_mut() {
            if item.line_number == line {
                if item.span.start >= pending.inserted_at {
                    item.span = item.span.shifted(pending.inserted_len);
                }
                item.text = text.clone();
                item.linked_issue_id = linked.clone();
                item.priority = classify_priority(&item.pattern, &item.text);
            }
            item.context = patch_snippet(&item.context, item.line_number, line, new_line);
        }
        items[target].span = pending.new_span;

        debug!(
            "{}:{} linked to {}",
            pending.document_id,
            line + 1,
            pending.issue_id
        );
        ConfirmOutcome::Updated
    }

    /// Runs both linking phases against a host that can read and edit the
    /// document. The cache is only confirmed when the host applied the
    /// edit; a failed edit leaves the item unlinked and is returned as an
    /// error.
    pub fn link_with<H>(
        &mut self,
        host: &mut H,
        item: &TodoItem,
        issue_id: &IssueId,
    ) -> Result<LinkOutcome>
    where
        H: SourceDocument + EditSink + ?Sized,
    {
        let Some(line_text) = host.line_text(item.line_number).map(str::to_string) else {
            return Ok(LinkOutcome::MarkerNotFound);
        };
        let outcome = self.link(host.path(), item, issue_id, &line_text);
        if let LinkOutcome::Pending(pending) = &outcome {
            host.apply(&pending.edit).with_context(|| {
                format!(
                    "failed to write link {} to {}:{}",
                    pending.issue_id,
                    pending.document_id,
                    pending.edit.line + 1
                )
            })?;
            if self.confirm_link(pending) == ConfirmOutcome::Stale {
                debug!("{} changed since its last scan; cache left as is", pending.document_id);
            }
        }
        Ok(outcome)
    }
}
