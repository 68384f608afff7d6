//! Chat log parser.
//!
//! [`ChatLogParser`] runs the extraction pipeline over an exported chat log
//! and returns a [`ChatLog`]:
//!
//! 1. drop the first line (the export tool's preamble)
//! 2. extract and strip the leading timestamp
//! 3. extract and strip the leading author label
//! 4. assemble one [`ParsedMessage`] per remaining line
//!
//! # Example
//!
//! ```rust
//! use chatturns::ChatLogParser;
//!
//! let content = "Messages are end-to-end encrypted.\n\
//!                01/01/2023, 09:00 - Alice: Hi\n\
//!                01/01/2023, 09:01 - Alice: How are you?\n\
//!                01/01/2023, 09:02 - Bob: Good thanks";
//!
//! let log = ChatLogParser::new().parse_str(content);
//! assert_eq!(log.len(), 3);
//! assert_eq!(log.messages()[2].author(), Some("Bob"));
//!
//! let turns = log.merge();
//! assert_eq!(turns[0].text, "Hi <eom> How are you? <eom>");
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config::ParserConfig;
use crate::core::processor::{ProcessingStats, merge_turns};
use crate::error::{ChatturnsError, Result};
use crate::parsing::{
    NonStandardRows, assemble_records, author_prefix_pattern, extract_authors, extract_timestamps,
};
use crate::{MergedTurn, ParsedMessage};

/// Parser for exported chat logs.
///
/// Holds only configuration and compiled patterns, so one parser can be
/// reused for any number of logs and every call returns an independent
/// [`ChatLog`].
#[derive(Debug, Clone)]
pub struct ChatLogParser {
    config: ParserConfig,
    timestamp: Regex,
    name: Regex,
    author_prefix: Regex,
}

impl ChatLogParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
            .expect("default patterns are valid regular expressions")
    }

    /// Creates a parser with custom configuration.
    ///
    /// Fails if either pattern does not compile.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        let timestamp = compile("timestamp", &config.timestamp_pattern)?;
        let name = compile("name", &config.name_pattern)?;
        let author_prefix = compile("name", &author_prefix_pattern(&config.name_pattern))?;

        Ok(Self {
            config,
            timestamp,
            name,
            author_prefix,
        })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a chat log file.
    ///
    /// The file is read in full once. A missing or unreadable file is the
    /// only hard error; malformed lines become non-standard rows.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> Result<ChatLog> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ChatturnsError::read_file(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read chat log");
        Ok(self.parse_str(&content))
    }

    /// Parses chat log content. The first line is always discarded.
    pub fn parse_str(&self, content: &str) -> ChatLog {
        self.parse_lines(content.lines().skip(1))
    }

    /// Parses lines that have already had the header line removed.
    pub fn parse_lines<I, S>(&self, lines: I) -> ChatLog
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();

        let dated = extract_timestamps(
            lines,
            &self.timestamp,
            &self.config.datetime_format,
            &self.config.separator,
        );
        let named = extract_authors(
            dated.lines,
            &dated.non_standard,
            &self.name,
            &self.author_prefix,
        );
        let messages = assemble_records(dated.timestamps, named.authors, named.lines);

        debug!(
            rows = messages.len(),
            non_standard = dated.non_standard.len(),
            "parsed chat log"
        );

        ChatLog {
            messages,
            non_standard: dated.non_standard,
            boundary_marker: self.config.boundary_marker.clone(),
        }
    }
}

impl Default for ChatLogParser {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ChatturnsError::invalid_pattern(name, pattern, e))
}

/// The parsed contents of one chat log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ParsedMessage>,
    non_standard: NonStandardRows,
    boundary_marker: String,
}

impl ChatLog {
    /// All records in source order, indexed from zero.
    pub fn messages(&self) -> &[ParsedMessage] {
        &self.messages
    }

    /// Consumes the log, returning its records.
    pub fn into_messages(self) -> Vec<ParsedMessage> {
        self.messages
    }

    /// Rows that did not start with a parseable timestamp.
    pub fn non_standard_rows(&self) -> &NonStandardRows {
        &self.non_standard
    }

    /// Marker used by [`merge`](Self::merge).
    pub fn boundary_marker(&self) -> &str {
        &self.boundary_marker
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Merges consecutive messages from the same author into turns.
    ///
    /// See [`merge_turns`] for the exact grouping rules.
    pub fn merge(&self) -> Vec<MergedTurn> {
        merge_turns(&self.messages, &self.boundary_marker)
    }

    /// Counts for this log and a given merge result.
    pub fn stats(&self, turns: &[MergedTurn]) -> ProcessingStats {
        ProcessingStats::new(self.len(), self.non_standard.len(), turns.len())
    }
}
