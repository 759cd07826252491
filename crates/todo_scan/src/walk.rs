// crates/todo_scan/src/walk.rs

use anyhow::{bail, Result};
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Directories never worth scanning.
const SKIPPED_DIRS: &[&str] = &["target", "node_modules"];

/// Expands `paths` into a sorted, de-duplicated list of files. Directories
/// are walked recursively, skipping hidden entries and [`SKIPPED_DIRS`].
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in paths {
        if !root.exists() {
            bail!("Path {} does not exist", root.display());
        }
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        files.extend(
            WalkDir::new(root)
                .into_iter()
                .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry))
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path()),
        );
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    let name: &str = &name;
    name.starts_with('.') || (entry.file_type().is_dir() && SKIPPED_DIRS.contains(&name))
}
