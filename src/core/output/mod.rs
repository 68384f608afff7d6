//! Output format writers.
//!
//! Writers accept any slice of [`ToOutputRow`](crate::core::models::ToOutputRow)
//! records, so parsed messages and merged turns go through the same code:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatturns::Result<()> {
//! use chatturns::ChatLogParser;
//! use chatturns::core::models::OutputConfig;
//! use chatturns::core::output::{write_csv, write_jsonl};
//!
//! let log = ChatLogParser::new().parse_path("chat.txt")?;
//! let config = OutputConfig::new().with_timestamps();
//!
//! write_csv(log.messages(), "records.csv", &config)?;
//! write_jsonl(&log.merge(), "turns.jsonl", &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
