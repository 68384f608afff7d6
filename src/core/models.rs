//! Output-side models shared by the writers.

use chrono::NaiveDateTime;

use crate::{MergedTurn, ParsedMessage};

/// Configuration for output format.
/// Controls which optional columns are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
    /// Include record/turn indices in output
    pub include_index: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_index(mut self) -> Self {
        self.include_index = true;
        self
    }
}

/// Borrowed, writer-facing view of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRow<'a> {
    pub index: usize,
    pub timestamp: Option<NaiveDateTime>,
    pub author: Option<&'a str>,
    pub text: &'a str,
}

/// Anything the CSV/JSON writers can emit.
pub trait ToOutputRow {
    fn to_output_row(&self) -> OutputRow<'_>;
}

impl ToOutputRow for ParsedMessage {
    fn to_output_row(&self) -> OutputRow<'_> {
        OutputRow {
            index: self.index,
            timestamp: self.timestamp,
            author: self.author.as_deref(),
            text: &self.text,
        }
    }
}

impl ToOutputRow for MergedTurn {
    fn to_output_row(&self) -> OutputRow<'_> {
        OutputRow {
            index: self.index,
            timestamp: self.started_at,
            author: self.author.as_deref(),
            text: &self.text,
        }
    }
}
