// crates/todo_marker/src/scan.rs

use crate::marker::MarkerSet;
use crate::span::Span;

/// One marker occurrence on a line: the configured keyword and the span of
/// the keyword token (plus an optional trailing colon).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    pub pattern: String,
    pub span: Span,
}

/// Finds every configured marker on `line`.
///
/// Each keyword is searched once and contributes its first occurrence.
/// The result is ordered by column; the configured order only breaks ties.
pub fn scan_line(line: &str, markers: &MarkerSet) -> Vec<MarkerMatch> {
    let mut found: Vec<MarkerMatch> = markers
        .iter()
        .filter_map(|marker| {
            marker.find_in(line).map(|span| MarkerMatch {
                pattern: marker.keyword().to_string(),
                span,
            })
        })
        .collect();
    found.sort_by_key(|m| m.span.start);
    found
}

/// Cheap check for "does this line mention any marker at all".
pub fn line_has_marker(line: &str, markers: &MarkerSet) -> bool {
    markers.iter().any(|marker| marker.is_match(line))
}
