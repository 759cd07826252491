// crates/todo_scan/src/lib.rs

//! Command-line host for the todo index: scans files on disk, writes link
//! tokens into them and drafts tracker issues.

pub mod config;
pub mod file_host;
pub mod report;
pub mod walk;

use anyhow::{anyhow, bail, Context, Result};
use issue_draft::IssueDraft;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use todo_index::{IssueId, LinkOutcome, Priority, SourceDocument, TodoIndex, TodoItem};

use crate::config::AppConfig;
use crate::file_host::FileDocument;

/// How `scan` prints its results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub show_context: bool,
    pub json: bool,
}

/// Scans every text file under `paths` and writes a report to `out`.
/// Returns the number of items found.
pub fn run_scan(
    config: &AppConfig,
    paths: &[PathBuf],
    options: ScanOptions,
    out: &mut dyn Write,
) -> Result<usize> {
    let mut index = TodoIndex::new();
    let mut scanned: Vec<String> = Vec::new();

    for path in walk::collect_files(paths)? {
        let document = match FileDocument::open(&path) {
            Ok(document) => document,
            Err(err) => {
                debug!("skipping {}: {:#}", path.display(), err);
                continue;
            }
        };
        index.scan_document(&document, &config.markers);
        scanned.push(document.path().to_string());
    }

    let items: Vec<&TodoItem> = scanned.iter().flat_map(|doc| index.get(doc)).collect();
    let with_items = scanned.iter().filter(|doc| index.count(doc) > 0).count();
    info!(
        "{} item(s) in {} of {} scanned file(s)",
        items.len(),
        with_items,
        scanned.len()
    );

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &items)?;
        writeln!(out)?;
    } else {
        for item in &items {
            writeln!(out, "{}", report::format_item(item))?;
            if options.show_context {
                writeln!(out, "{}", report::indent_context(&item.context))?;
            }
        }
        writeln!(out, "{}", report::summary(items.len(), with_items))?;
    }
    Ok(items.len())
}

/// Links the marker on `line` (one-based) of `file` to `issue`, editing the
/// file in place.
pub fn run_link(
    config: &AppConfig,
    file: &Path,
    line: usize,
    issue: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let issue_id: IssueId = issue
        .parse()
        .with_context(|| format!("Invalid issue id '{}'", issue))?;
    let mut document = FileDocument::open(file)?;
    let mut index = TodoIndex::new();
    let item = locate(&mut index, &document, config, line)?;

    match index.link_with(&mut document, &item, &issue_id)? {
        LinkOutcome::Pending(pending) => {
            writeln!(
                out,
                "Linked {}:{} to {}",
                pending.document_id,
                pending.edit.line + 1,
                pending.issue_id
            )?;
            writeln!(out, "{}", pending.edit.new_text.trim())?;
        }
        LinkOutcome::AlreadyLinked(existing) => {
            writeln!(
                out,
                "{}:{} is already linked to {}",
                item.file,
                item.display_line(),
                existing
            )?;
        }
        LinkOutcome::MarkerNotFound => {
            bail!(
                "{} is no longer on {}:{}",
                item.pattern,
                item.file,
                item.display_line()
            );
        }
    }
    Ok(())
}

/// Prints the issue draft for the marker on `line` (one-based) of `file`.
pub fn run_draft(
    config: &AppConfig,
    file: &Path,
    line: usize,
    impact: Option<Priority>,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let document = FileDocument::open(file)?;
    let mut index = TodoIndex::new();
    let item = locate(&mut index, &document, config, line)?;
    let draft = IssueDraft::from_item(&item, impact);

    if json {
        serde_json::to_writer_pretty(&mut *out, &draft)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Title: {}", draft.title)?;
        writeln!(out, "Priority: {}", draft.priority)?;
        if let Some(existing) = &item.linked_issue_id {
            writeln!(out, "Linked: {}", existing)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", draft.description)?;
    }
    Ok(())
}

fn locate(
    index: &mut TodoIndex,
    document: &FileDocument,
    config: &AppConfig,
    line: usize,
) -> Result<TodoItem> {
    let zero_based = line
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Line numbers start at 1"))?;
    index.scan_document(document, &config.markers);
    index
        .find_on_line(document.path(), zero_based)
        .cloned()
        .ok_or_else(|| {
            anyhow!(
                "No marker ({}) found on {}:{}",
                config.markers.keywords().join(", "),
                document.disk_path().display(),
                line
            )
        })
}
