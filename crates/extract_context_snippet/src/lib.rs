// crates/extract_context_snippet/src/lib.rs

/// Lines shown on each side of the target line.
pub const CONTEXT_RADIUS: usize = 2;

/// Prefix of the target line inside a snippet.
pub const TARGET_PREFIX: &str = ">>> ";

/// Prefix of every other line; same width as [`TARGET_PREFIX`] so the
/// snippet stays aligned in a monospace font.
pub const NEUTRAL_PREFIX: &str = "    ";

/// Builds the snippet around `target` using [`CONTEXT_RADIUS`].
///
/// See [`extract_context_snippet_with_radius`].
pub fn extract_context_snippet<S: AsRef<str>>(lines: &[S], target: usize) -> String {
    extract_context_snippet_with_radius(lines, target, CONTEXT_RADIUS)
}

/// Returns the target line and up to `radius` lines before and after it,
/// joined with `\n`. The window is clamped at the document edges. The
/// target line is prefixed with [`TARGET_PREFIX`], the rest with
/// [`NEUTRAL_PREFIX`].
///
/// A `target` outside the document yields an empty snippet.
pub fn extract_context_snippet_with_radius<S: AsRef<str>>(
    lines: &[S],
    target: usize,
    radius: usize,
) -> String {
    if target >= lines.len() {
        return String::new();
    }
    let first = target.saturating_sub(radius);
    let last = (target + radius).min(lines.len() - 1);

    (first..=last)
        .map(|i| {
            let prefix = if i == target { TARGET_PREFIX } else { NEUTRAL_PREFIX };
            format!("{}{}", prefix, lines[i].as_ref())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrites one document line inside a snippet previously built by
/// [`extract_context_snippet`] for `target`, keeping its prefix. When
/// `edited` lies outside the snippet's window the snippet is returned
/// unchanged.
pub fn patch_snippet(snippet: &str, target: usize, edited: usize, new_text: &str) -> String {
    let first = target.saturating_sub(CONTEXT_RADIUS);
    if edited < first || edited > target + CONTEXT_RADIUS {
        return snippet.to_string();
    }
    let position = edited - first;

    snippet
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i != position {
                line.to_string()
            } else if edited == target {
                format!("{}{}", TARGET_PREFIX, new_text)
            } else {
                format!("{}{}", NEUTRAL_PREFIX, new_text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("line {}", i)).collect()
    }

    #[test]
    fn single_line_document() {
        let lines = vec!["// TODO: only line"];
        assert_eq!(extract_context_snippet(&lines, 0), ">>> // TODO: only line");
    }

    #[test]
    fn middle_of_document_shows_two_lines_each_side() {
        let lines = numbered(10);
        let snippet = extract_context_snippet(&lines, 5);
        let expected = [
            "    line 3",
            "    line 4",
            ">>> line 5",
            "    line 6",
            "    line 7",
        ]
        .join("\n");
        assert_eq!(snippet, expected);
    }

    #[test]
    fn window_is_clamped_at_both_edges() {
        let lines = numbered(10);
        let head = extract_context_snippet(&lines, 0);
        assert_eq!(head, ">>> line 0\n    line 1\n    line 2");
        let tail = extract_context_snippet(&lines, 9);
        assert_eq!(tail, "    line 7\n    line 8\n>>> line 9");
    }

    #[test]
    fn out_of_range_target_is_empty() {
        let lines = numbered(3);
        assert_eq!(extract_context_snippet(&lines, 3), "");
        let empty: Vec<&str> = Vec::new();
        assert_eq!(extract_context_snippet(&empty, 0), "");
    }

    #[test]
    fn custom_radius() {
        let lines = numbered(5);
        assert_eq!(
            extract_context_snippet_with_radius(&lines, 2, 0),
            ">>> line 2"
        );
    }

    #[test]
    fn prefixes_have_equal_width() {
        assert_eq!(TARGET_PREFIX.len(), NEUTRAL_PREFIX.len());
    }

    #[test]
    fn patch_rewrites_the_target_line() {
        let lines = vec!["fn a() {", "    // TODO: x", "}"];
        let snippet = extract_context_snippet(&lines, 1);
        let patched = patch_snippet(&snippet, 1, 1, "    // [ABC-1] TODO: x");
        assert_eq!(patched, "    fn a() {\n>>>     // [ABC-1] TODO: x\n    }");
    }

    #[test]
    fn patch_rewrites_a_neighbour_line() {
        let lines = numbered(10);
        let snippet = extract_context_snippet(&lines, 5);
        let patched = patch_snippet(&snippet, 5, 7, "changed");
        assert_eq!(patched.lines().last(), Some("    changed"));
        assert_eq!(patched.lines().count(), 5);
    }

    #[test]
    fn patch_near_document_start() {
        let lines = numbered(4);
        let snippet = extract_context_snippet(&lines, 0);
        let patched = patch_snippet(&snippet, 0, 2, "changed");
        assert_eq!(patched, ">>> line 0\n    line 1\n    changed");
    }

    #[test]
    fn patch_outside_window_is_a_no_op() {
        let lines = numbered(10);
        let snippet = extract_context_snippet(&lines, 5);
        assert_eq!(patch_snippet(&snippet, 5, 8, "changed"), snippet);
        assert_eq!(patch_snippet(&snippet, 5, 2, "changed"), snippet);
    }
}
