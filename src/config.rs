//! Configuration for the chat log parser.
//!
//! The defaults describe the classic Android export layout:
//!
//! ```text
//! 15/01/2024, 10:30 - Alice: Hello there
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatturns::config::ParserConfig;
//! use chatturns::ChatLogParser;
//!
//! let config = ParserConfig::new()
//!     .with_boundary_marker("</s>");
//!
//! let parser = ChatLogParser::with_config(config)?;
//! # Ok::<(), chatturns::ChatturnsError>(())
//! ```

use serde::{Deserialize, Serialize};

/// chrono format of the leading timestamp token.
pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Leading `DD/MM/YYYY, HH:MM` token.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = r"^\d{2}/\d{2}/\d{4},\s+\d{2}:\d{2}";

/// Everything up to the first colon.
pub const DEFAULT_NAME_PATTERN: &str = "^[^:]+";

/// Literal text between the timestamp and the author.
pub const DEFAULT_SEPARATOR: &str = " - ";

/// Token appended after every message inside a merged turn.
pub const DEFAULT_BOUNDARY_MARKER: &str = "<eom>";

/// Configuration for [`ChatLogParser`](crate::ChatLogParser).
///
/// Patterns are plain regex source strings; they are compiled once when the
/// parser is built, so a bad pattern surfaces as
/// [`ChatturnsError::InvalidPattern`](crate::ChatturnsError::InvalidPattern)
/// at construction rather than mid-parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// chrono format used to parse the matched timestamp token
    pub datetime_format: String,

    /// Regex matching the leading timestamp token
    pub timestamp_pattern: String,

    /// Regex matching the leading author name (must not consume the colon)
    pub name_pattern: String,

    /// Literal removed from every line after timestamp extraction
    pub separator: String,

    /// Token appended after each message when merging turns
    pub boundary_marker: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            boundary_marker: DEFAULT_BOUNDARY_MARKER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chrono format for timestamps.
    #[must_use]
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Sets the leading timestamp regex.
    #[must_use]
    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_pattern = pattern.into();
        self
    }

    /// Sets the leading author-name regex.
    #[must_use]
    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = pattern.into();
        self
    }

    /// Sets the timestamp/author separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the end-of-message marker used when merging.
    #[must_use]
    pub fn with_boundary_marker(mut self, marker: impl Into<String>) -> Self {
        self.boundary_marker = marker.into();
        self
    }
}
