// crates/todo_marker/src/lib.rs

//! Marker keywords (`TODO`, `FIXME`, …) and the single-line scanner that
//! finds them. Shared by every crate that needs to recognise a marker
//! token in source text.
//!
//!  * **Pure** – nothing here touches the filesystem or keeps state; a scan
//!    is a function of `(line, MarkerSet)`.
//!  * **Char columns** – every [`Span`] counts Unicode scalar values, not
//!    bytes, so it lines up with what an editor shows.

mod marker;
mod scan;
mod span;

pub use marker::{Marker, MarkerSet};
pub use scan::{line_has_marker, scan_line, MarkerMatch};
pub use span::{byte_offset, char_column, char_len, Span};

/// Keywords recognised when nothing else is configured, in priority order.
pub const DEFAULT_MARKERS: &[&str] = &["TODO", "FIXME", "HACK", "XXX", "BUG"];
