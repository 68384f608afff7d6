//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::core::models::{OutputConfig, OutputRow, ToOutputRow};
use crate::error::ChatturnsError;

/// Minimal record structure for JSON and JSONL output.
/// Only includes the optional fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    author: Option<&'a str>,
    text: &'a str,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn from_row(row: OutputRow<'a>, config: &OutputConfig) -> Self {
        Self {
            index: config.include_index.then_some(row.index),
            date: if config.include_timestamps {
                row.timestamp
                    .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string())
            } else {
                None
            },
            author: row.author,
            text: row.text,
        }
    }
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"author": "Alice", "text": "Hi <eom> How are you? <eom>"},
///   {"author": null, "text": "<Media omitted> <eom>"}
/// ]
/// ```
pub fn write_json<R: ToOutputRow>(
    records: &[R],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatturnsError> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json<R: ToOutputRow>(
    records: &[R],
    config: &OutputConfig,
) -> Result<String, ChatturnsError> {
    let rows: Vec<JsonRecord<'_>> = records
        .iter()
        .map(|r| JsonRecord::from_row(r.to_output_row(), config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
