//! Record types produced by the parser and the merger.
//!
//! - [`ParsedMessage`] is one line of the chat log after the timestamp and
//!   author prefixes have been stripped.
//! - [`MergedTurn`] is a run of consecutive messages from the same author,
//!   joined with a boundary marker.
//!
//! # Example
//!
//! ```
//! use chatturns::ParsedMessage;
//!
//! let msg = ParsedMessage::new(0, "Hello!").with_author("Alice");
//! assert_eq!(msg.author(), Some("Alice"));
//! assert!(!msg.is_standard());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single parsed chat line.
///
/// `timestamp` is `None` exactly when the line did not start with a
/// recognizable timestamp (a continuation line or a system notice). Such
/// rows also never carry an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Zero-based position in the log, header line excluded.
    pub index: usize,

    /// When the message was sent. No timezone is recorded in exports.
    #[serde(rename = "date")]
    pub timestamp: Option<NaiveDateTime>,

    /// Author label as written in the export.
    pub author: Option<String>,

    /// Message text with prefixes removed and whitespace trimmed.
    pub text: String,
}

impl ParsedMessage {
    /// Creates a record with only an index and text.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            timestamp: None,
            author: None,
            text: text.into(),
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Builder method to set the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the line carried a parsed timestamp.
    pub fn is_standard(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// Consecutive messages from one author, merged into one text.
///
/// Every source message in `text` is followed by the boundary marker, so
/// the marker count equals [`message_count`](Self::message_count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedTurn {
    /// Zero-based position among the merged turns.
    pub index: usize,

    /// Shared author of the run; `None` for a run of non-standard rows.
    pub author: Option<String>,

    /// Member texts, each followed by the boundary marker.
    pub text: String,

    /// Number of source messages merged into this turn.
    pub message_count: usize,

    /// Timestamp of the first message in the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub started_at: Option<NaiveDateTime>,
}

impl MergedTurn {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.started_at
    }

    /// Splits the merged text back into member texts.
    ///
    /// Only exact for texts that don't themselves contain the marker.
    pub fn parts<'a>(&'a self, marker: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.text
            .split(marker)
            .map(str::trim)
            .take(self.message_count)
    }
}
