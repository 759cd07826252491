// crates/todo_marker/src/marker.rs

use log::{debug, warn};
use regex::Regex;

use crate::span::{char_column, Span};
use crate::DEFAULT_MARKERS;

/// One configured keyword together with its compiled, word-bounded,
/// case-insensitive matcher.
#[derive(Debug, Clone)]
pub struct Marker {
    keyword: String,
    regex: Regex,
}

impl Marker {
    /// Builds a marker for `keyword`. Returns `None` when the keyword is
    /// empty or contains anything other than letters, digits and `_`.
    pub fn new(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        if !is_well_formed(keyword) {
            return None;
        }
        // The optional colon belongs to the token; free text after it does not.
        let regex = Regex::new(&format!(r"(?i)\b{}\b:?", regex::escape(keyword))).ok()?;
        Some(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    /// The keyword as it was configured.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Span of the first occurrence of the keyword token on `line`. The key
    /// of an issue link token such as `[BUG-12]` is not an occurrence.
    pub fn find_in(&self, line: &str) -> Option<Span> {
        let found = self
            .regex
            .find_iter(line)
            .find(|m| !is_link_key(line, m.start(), m.end()))?;
        Some(Span::new(
            char_column(line, found.start()),
            char_column(line, found.end()),
        ))
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.find_in(line).is_some()
    }

    fn same_keyword(&self, other: &str) -> bool {
        self.keyword.to_lowercase() == other.trim().to_lowercase()
    }
}

/// `true` when `line[start..end]` is the `KEY` of a `[KEY-123]` link token.
fn is_link_key(line: &str, start: usize, end: usize) -> bool {
    if !line[..start].ends_with('[') || !line[start..end].bytes().all(|b| b.is_ascii_uppercase()) {
        return false;
    }
    let Some(number) = line[end..].strip_prefix('-') else {
        return false;
    };
    let digits = number.len() - number.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    digits > 0 && number[digits..].starts_with(']')
}

fn is_well_formed(keyword: &str) -> bool {
    !keyword.is_empty() && keyword.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Ordered set of marker keywords.
///
/// Construction never fails: malformed keywords are logged and dropped, and
/// a keyword repeated with different casing is kept only once. A set left
/// empty simply matches nothing.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut markers: Vec<Marker> = Vec::new();
        for raw in keywords {
            let raw = raw.as_ref();
            if markers.iter().any(|m| m.same_keyword(raw)) {
                debug!("duplicate marker keyword {:?} ignored", raw);
                continue;
            }
            match Marker::new(raw) {
                Some(marker) => markers.push(marker),
                None => warn!("ignoring malformed marker keyword {:?}", raw),
            }
        }
        Self { markers }
    }

    /// Parses a comma-separated list such as `"TODO, FIXME,HACK"`.
    /// Blank entries are skipped silently.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(',').filter(|entry| !entry.trim().is_empty()))
    }

    pub fn empty() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Markers in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn keywords(&self) -> Vec<&str> {
        self.markers.iter().map(Marker::keyword).collect()
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}
