// crates/issue_draft/src/lib.rs

//! Builds the title, description and priority of a tracker issue from a
//! [`TodoItem`]. Only text is produced here; sending it anywhere is the
//! tracker client's business.

use serde::Serialize;
use std::path::Path;
use todo_index::{Priority, TodoItem};
use todo_marker::Marker;

/// Longest title we produce, in chars.
pub const MAX_TITLE_LEN: usize = 80;

const TITLE_SEPARATOR: &str = " • ";
const FALLBACK_TITLE: &str = "TODO item";

/// Everything a tracker needs to open an issue for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    /// Tracker priority number, see [`tracker_priority`].
    pub priority: u8,
}

impl IssueDraft {
    /// Drafts an issue for `item`. `impact` overrides the item's inferred
    /// priority when the user picked one explicitly.
    pub fn from_item(item: &TodoItem, impact: Option<Priority>) -> Self {
        Self {
            title: issue_title(item),
            description: issue_description(item),
            priority: tracker_priority(impact.unwrap_or(item.priority)),
        }
    }
}

/// The item's text after its marker keyword: comment leaders, any link
/// token, the keyword, its colon and the following whitespace are dropped.
pub fn clean_todo_text(item: &TodoItem) -> String {
    let text = item.text.as_str();
    let rest = Marker::new(&item.pattern)
        .and_then(|marker| marker.find_in(text))
        .map(|span| text.chars().skip(span.end).collect::<String>())
        .unwrap_or_else(|| text.to_string());
    rest.trim().to_string()
}

/// `"<description> • <file name>:<line>"`, never longer than
/// [`MAX_TITLE_LEN`] chars. Only the description part gets truncated.
pub fn issue_title(item: &TodoItem) -> String {
    let location = format!("{}:{}", short_file_name(&item.file), item.display_line());
    let mut description = clean_todo_text(item);
    if description.is_empty() {
        description = FALLBACK_TITLE.to_string();
    }

    let available = MAX_TITLE_LEN
        .saturating_sub(location.chars().count())
        .saturating_sub(TITLE_SEPARATOR.chars().count());
    if description.chars().count() > available {
        description = description
            .chars()
            .take(available.saturating_sub(3))
            .collect::<String>()
            + "...";
    }

    format!("{}{}{}", description, TITLE_SEPARATOR, location)
}

/// Markdown body: the location and the item's context in a fenced block
/// tagged with the file extension.
pub fn issue_description(item: &TodoItem) -> String {
    let language = Path::new(&item.file)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("text");

    [
        format!("**Location:** `{}:{}`", item.file, item.display_line()),
        String::new(),
        format!("```{}", language),
        item.context.clone(),
        "```".to_string(),
    ]
    .join("\n")
}

/// Maps a priority onto the tracker's scale, where 1 is urgent and 4 is
/// low. Urgent is left for people to set by hand.
pub fn tracker_priority(priority: Priority) -> u8 {
    match priority {
        Priority::High => 2,
        Priority::Medium => 3,
        Priority::Low => 4,
    }
}

fn short_file_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}
