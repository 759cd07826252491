// crates/issue_link/src/issue_id.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static ISSUE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]+)-([0-9]+)$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueIdError {
    #[error("issue id is empty")]
    Empty,

    #[error("issue id '{0}' must look like KEY-123 (uppercase letters, a dash, digits)")]
    Malformed(String),
}

/// A validated tracker identifier such as `ABC-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueId {
    raw: String,
    dash: usize,
}

impl IssueId {
    /// The team / project key, e.g. `ABC`.
    pub fn key(&self) -> &str {
        &self.raw[..self.dash]
    }

    /// The issue number exactly as written, e.g. `123`.
    pub fn number(&self) -> &str {
        &self.raw[self.dash + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for IssueId {
    type Err = IssueIdError;

    /// Accepts `ABC-123` as well as the bracketed token form `[ABC-123]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IssueIdError::Empty);
        }
        let bare = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        let caps = ISSUE_ID_RE
            .captures(bare)
            .ok_or_else(|| IssueIdError::Malformed(trimmed.to_string()))?;
        Ok(Self {
            raw: bare.to_string(),
            dash: caps[1].len(),
        })
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for IssueId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
