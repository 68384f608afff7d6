//! Unified error types for chatturns.
//!
//! Per-row parsing problems never show up here: a line without a timestamp
//! or author is recorded with absent fields and parsing carries on. Only
//! problems that stop the whole run are errors:
//!
//! - the input file cannot be read
//! - a configured pattern does not compile
//! - an output format is unknown or cannot be written

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatturns operations.
///
/// # Example
///
/// ```rust
/// use chatturns::error::Result;
/// use chatturns::ParsedMessage;
///
/// fn my_function() -> Result<Vec<ParsedMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatturnsError>;

/// The error type for all chatturns operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatturnsError {
    /// An I/O error occurred.
    ///
    /// Most commonly raised while writing output files.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The chat log could not be read.
    ///
    /// Raised when the file is missing, unreadable or not valid UTF-8.
    /// No partially parsed log is returned.
    #[error("Failed to read chat log {}: {source}", path.display())]
    ReadFile {
        /// Path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A configured regular expression does not compile.
    #[error("Invalid {name} pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Which pattern failed ("timestamp" or "name")
        name: &'static str,
        /// The pattern source text
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The requested output format is unknown or unavailable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output buffer was not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatturnsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatturnsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatturnsError {
    /// Creates a read error for the chat log at `path`.
    pub fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatturnsError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(
        name: &'static str,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        ChatturnsError::InvalidPattern {
            name,
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatturnsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an I/O error, including read failures.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ChatturnsError::Io(_) | ChatturnsError::ReadFile { .. }
        )
    }

    /// Returns `true` if the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            ChatturnsError::Io(e) | ChatturnsError::ReadFile { source: e, .. } => {
                e.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Returns `true` if this is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, ChatturnsError::InvalidPattern { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatturnsError::InvalidFormat { .. })
    }
}
