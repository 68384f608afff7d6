//! # chatturns
//!
//! Parse exported chat logs into structured records and merge consecutive
//! messages from one author into turns.
//!
//! Each line of an export looks like
//!
//! ```text
//! 15/01/2024, 10:30 - Alice: Hello there
//! ```
//!
//! Lines that don't start with a timestamp (continuations of multi-line
//! messages, system notices, `<Media omitted>`) are kept as *non-standard*
//! rows with no timestamp and no author.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatturns::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let log = ChatLogParser::new().parse_path("chat.txt")?;
//!
//!     for msg in log.messages() {
//!         println!("{:?} {:?}: {}", msg.timestamp(), msg.author(), msg.text());
//!     }
//!
//!     // "Hi <eom> How are you? <eom>"
//!     let turns = log.merge();
//!     write_jsonl(&turns, "turns.jsonl", &OutputConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatLogParser`] and its result, [`ChatLog`]
//! - [`parsing`] - the timestamp and author extraction stages
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`message`] - [`ParsedMessage`], [`MergedTurn`]
//! - [`core`] - merging, statistics and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`ChatturnsError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatturnsError, Result};
pub use message::{MergedTurn, ParsedMessage};
pub use parser::{ChatLog, ChatLogParser};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatturns::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatLog, ChatLogParser, MergedTurn, ParsedMessage};

    pub use crate::error::{ChatturnsError, Result};

    pub use crate::config::ParserConfig;

    pub use crate::core::models::OutputConfig;
    pub use crate::core::processor::{ProcessingStats, merge_turns};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    pub use crate::parsing::NonStandardRows;
}
