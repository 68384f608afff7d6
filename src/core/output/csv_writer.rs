//! CSV output writer.

use std::fs::File;

use crate::core::models::{OutputConfig, OutputRow, ToOutputRow};
use crate::error::ChatturnsError;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `[Index;][Timestamp;]Author;Text`
/// - Absent authors and timestamps are empty fields
/// - Encoding: UTF-8
pub fn write_csv<R: ToOutputRow>(
    records: &[R],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), ChatturnsError> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);
    write_rows(&mut writer, records, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a CSV string.
pub fn to_csv<R: ToOutputRow>(records: &[R], config: &OutputConfig) -> Result<String, ChatturnsError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_rows(&mut writer, records, config)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatturnsError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_rows<W: std::io::Write, R: ToOutputRow>(
    writer: &mut csv::Writer<W>,
    records: &[R],
    config: &OutputConfig,
) -> Result<(), ChatturnsError> {
    writer.write_record(build_header(config))?;
    for record in records {
        writer.write_record(build_record(&record.to_output_row(), config))?;
    }
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_index {
        header.push("Index");
    }
    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Author");
    header.push("Text");

    header
}

/// Build CSV record for a single row.
fn build_record(row: &OutputRow<'_>, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_index {
        record.push(row.index.to_string());
    }
    if config.include_timestamps {
        record.push(
            row.timestamp
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        );
    }

    record.push(row.author.unwrap_or_default().to_string());
    record.push(row.text.to_string());

    record
}
