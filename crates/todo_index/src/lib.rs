// crates/todo_index/src/lib.rs

//! `todo_index`: per-document index of marker occurrences.
//!
//!  * **Full rescans only** – [`TodoIndex::scan`] replaces a document's
//!    entry wholesale; nothing is updated incrementally.
//!  * **Queries never scan** – `get`, `find_at`, `find_on_line` and `count`
//!    only read the cache.
//!  * **Two-phase linking** – [`TodoIndex::link`] describes the text edit,
//!    the host applies it, and only then does [`TodoIndex::confirm_link`]
//!    touch the cache.
//!
//! Host editors plug in through the [`SourceDocument`] and [`EditSink`]
//! traits; [`LineBuffer`] is a ready-made in-memory host.

mod host;
mod index;
mod item;
mod link;

pub use host::{EditSink, LineBuffer, SourceDocument};
pub use index::TodoIndex;
pub use item::TodoItem;
pub use link::{ConfirmOutcome, LineEdit, LinkOutcome, PendingLink};

pub use classify_priority::Priority;
pub use issue_link::{IssueId, IssueIdError};
pub use todo_marker::{MarkerSet, Span, DEFAULT_MARKERS};
