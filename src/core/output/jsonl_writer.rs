//! JSON Lines (JSONL) output writer.
//!
//! One record per line, the usual shape for training and RAG pipelines.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::json_writer::JsonRecord;
use crate::core::models::{OutputConfig, ToOutputRow};
use crate::error::ChatturnsError;

/// Writes records to a JSONL file.
///
/// # Format
/// ```text
/// {"author":"Alice","text":"Hi <eom> How are you? <eom>"}
/// {"author":"Bob","text":"Good thanks <eom>"}
/// ```
pub fn write_jsonl<R: ToOutputRow>(
    records: &[R],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatturnsError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, records, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl<R: ToOutputRow>(
    records: &[R],
    config: &OutputConfig,
) -> Result<String, ChatturnsError> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, records, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write, R: ToOutputRow>(
    writer: &mut W,
    records: &[R],
    config: &OutputConfig,
) -> Result<(), ChatturnsError> {
    for record in records {
        let row = JsonRecord::from_row(record.to_output_row(), config);
        serde_json::to_writer(&mut *writer, &row)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
