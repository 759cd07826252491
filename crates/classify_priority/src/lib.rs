// crates/classify_priority/src/lib.rs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How urgent a marker occurrence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "unknown priority '{}' (expected high, medium or low)",
                other
            )),
        }
    }
}

/// Keywords that are urgent on their own.
const HIGH_KEYWORDS: &[&str] = &["BUG", "FIXME"];
/// Free-text hints that raise any marker to high.
const HIGH_HINTS: &[&str] = &["URGENT", "CRITICAL", "ASAP"];
/// Keywords that are low on their own.
const LOW_KEYWORDS: &[&str] = &["XXX"];
/// Free-text hints that lower a marker.
const LOW_HINTS: &[&str] = &["MINOR", "NICE TO HAVE", "OPTIONAL"];

/// Derives a priority from the marker keyword and the trimmed line text.
///
/// Rules, first match wins:
///  1. `High` for `BUG`/`FIXME`, or text containing `URGENT`, `CRITICAL`,
///     `ASAP` (any case) or a literal `!!!`.
///  2. `Low` for `XXX`, or text containing `MINOR`, `NICE TO HAVE` or
///     `OPTIONAL` (any case).
///  3. `Medium` otherwise.
pub fn classify_priority(pattern: &str, text: &str) -> Priority {
    let pattern = pattern.to_uppercase();
    let upper_text = text.to_uppercase();

    if HIGH_KEYWORDS.contains(&pattern.as_str())
        || HIGH_HINTS.iter().any(|hint| upper_text.contains(hint))
        || text.contains("!!!")
    {
        return Priority::High;
    }

    if LOW_KEYWORDS.contains(&pattern.as_str())
        || LOW_HINTS.iter().any(|hint| upper_text.contains(hint))
    {
        return Priority::Low;
    }

    Priority::Medium
}
