// crates/todo_scan/src/file_host.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use todo_index::{EditSink, LineBuffer, LineEdit, SourceDocument};

/// A file on disk acting as the host document. Edits are written straight
/// back to the file.
#[derive(Debug)]
pub struct FileDocument {
    disk_path: PathBuf,
    buffer: LineBuffer,
}

impl FileDocument {
    pub fn open<P: AsRef<Path>>(disk_path: P) -> Result<Self> {
        let disk_path = disk_path.as_ref();
        let text = fs::read_to_string(disk_path)
            .with_context(|| format!("Error reading file {}", disk_path.display()))?;
        Ok(Self {
            buffer: LineBuffer::from_text(logical_path(disk_path), &text),
            disk_path: disk_path.to_path_buf(),
        })
    }

    pub fn disk_path(&self) -> &Path {
        &self.disk_path
    }
}

impl SourceDocument for FileDocument {
    fn path(&self) -> &str {
        self.buffer.path()
    }

    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn line_text(&self, index: usize) -> Option<&str> {
        self.buffer.line_text(index)
    }
}

impl EditSink for FileDocument {
    /// Writes the edited text to disk first and only then keeps the edit in
    /// memory, so a failed write leaves both untouched.
    fn apply(&mut self, edit: &LineEdit) -> Result<()> {
        let mut edited = self.buffer.clone();
        edited.apply(edit)?;
        fs::write(&self.disk_path, edited.to_text())
            .with_context(|| format!("Error writing file {}", self.disk_path.display()))?;
        self.buffer = edited;
        Ok(())
    }
}

/// Index key for a file: its path as given, with `/` separators and no
/// leading `./`.
pub fn logical_path(path: &Path) -> String {
    let shown = path.to_string_lossy().replace('\\', "/");
    shown
        .strip_prefix("./")
        .map(str::to_string)
        .unwrap_or(shown)
}
