// crates/todo_index/src/host.rs

use anyhow::{bail, Result};
use todo_marker::{byte_offset, char_len};

use crate::link::LineEdit;

/// Read access to a document owned by the host editor.
pub trait SourceDocument {
    /// Stable logical path used as the index key.
    fn path(&self) -> &str;
    fn line_count(&self) -> usize;
    fn line_text(&self, index: usize) -> Option<&str>;
}

/// Applies single-line text edits to a host document.
pub trait EditSink {
    /// Must either apply the whole edit or fail without changing anything.
    fn apply(&mut self, edit: &LineEdit) -> Result<()>;
}

/// In-memory document: a path plus its lines. Each line keeps its own
/// terminator (`"\r\n"`, `"\n"` or none for an unterminated last line), so
/// [`LineBuffer::to_text`] gives back the same layout and an edit never
/// touches the line endings of other lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    path: String,
    lines: Vec<String>,
    endings: Vec<&'static str>,
}

impl LineBuffer {
    /// Lines joined by `\n`, without a trailing newline.
    pub fn new<P, I, S>(path: P, lines: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let mut endings = vec!["\n"; lines.len()];
        if let Some(last) = endings.last_mut() {
            *last = "";
        }
        Self {
            path: path.into(),
            lines,
            endings,
        }
    }

    pub fn from_text<P: Into<String>>(path: P, text: &str) -> Self {
        let (lines, endings) = text
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(line) = raw.strip_suffix("\r\n") {
                    (line.to_string(), "\r\n")
                } else if let Some(line) = raw.strip_suffix('\n') {
                    (line.to_string(), "\n")
                } else {
                    (raw.to_string(), "")
                }
            })
            .unzip();
        Self {
            path: path.into(),
            lines,
            endings,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .zip(&self.endings)
            .map(|(line, ending)| format!("{}{}", line, ending))
            .collect()
    }
}

impl SourceDocument for LineBuffer {
    fn path(&self) -> &str {
        &self.path
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl EditSink for LineBuffer {
    fn apply(&mut self, edit: &LineEdit) -> Result<()> {
        let line_count = self.lines.len();
        let Some(line) = self.lines.get_mut(edit.line) else {
            bail!(
                "line {} is past the end of {} ({} lines)",
                edit.line + 1,
                self.path,
                line_count
            );
        };
        let width = char_len(line);
        if edit.range.start > edit.range.end || edit.range.end > width {
            bail!(
                "edit range {}..{} is outside line {} of {} (width {})",
                edit.range.start,
                edit.range.end,
                edit.line + 1,
                self.path,
                width
            );
        }
        let start = byte_offset(line, edit.range.start);
        let end = byte_offset(line, edit.range.end);
        line.replace_range(start..end, &edit.new_text);
        Ok(())
    }
}
