//! Post-parse processing for chatturns.
//!
//! This module contains:
//! - [`models`] - Output configuration and the writer-facing row view
//! - [`processor`] - Turn merging and statistics
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod models;
pub mod output;
pub mod processor;

pub use models::{OutputConfig, OutputRow, ToOutputRow};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

pub use processor::{ProcessingStats, merge_turns};
