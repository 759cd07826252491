// crates/todo_scan/src/report.rs

use todo_index::TodoItem;

/// `path:line:col [priority] PATTERN text`, plus ` -> ISSUE` when linked.
/// Line and column are one-based.
pub fn format_item(item: &TodoItem) -> String {
    let mut line = format!(
        "{}:{}:{} [{}] {} {}",
        item.file,
        item.display_line(),
        item.span.start + 1,
        item.priority,
        item.pattern,
        item.text
    );
    if let Some(issue) = &item.linked_issue_id {
        line.push_str(" -> ");
        line.push_str(issue);
    }
    line
}

pub fn indent_context(context: &str) -> String {
    context
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn summary(items: usize, files: usize) -> String {
    format!(
        "{} TODO{} in {} file{}",
        items,
        if items == 1 { "" } else { "s" },
        files,
        if files == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_index::{MarkerSet, TodoIndex};

    #[test]
    fn formats_linked_and_unlinked_items() {
        let mut index = TodoIndex::new();
        let items = index.scan(
            "src/a.rs",
            &["    // TODO: later", "// [ABC-7] BUG: crash"],
            &MarkerSet::default(),
        );
        assert_eq!(
            format_item(&items[0]),
            "src/a.rs:1:8 [medium] TODO // TODO: later"
        );
        assert_eq!(
            format_item(&items[1]),
            "src/a.rs:2:12 [high] BUG // [ABC-7] BUG: crash -> ABC-7"
        );
    }

    #[test]
    fn summary_pluralises() {
        assert_eq!(summary(1, 1), "1 TODO in 1 file");
        assert_eq!(summary(0, 0), "0 TODOs in 0 files");
        assert_eq!(summary(3, 2), "3 TODOs in 2 files");
    }

    #[test]
    fn context_is_indented() {
        assert_eq!(indent_context(">>> a\n    b"), "    >>> a\n        b");
    }
}
