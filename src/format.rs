//! Output format selection.
//!
//! [`OutputFormat`] names a writer and [`write_to_format`] /
//! [`to_format_string`] dispatch to it. Both accept parsed messages or
//! merged turns.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatturns::Result<()> {
//! use chatturns::ChatLogParser;
//! use chatturns::core::models::OutputConfig;
//! use chatturns::format::{OutputFormat, to_format_string};
//!
//! let log = ChatLogParser::new().parse_str("header\n01/01/2023, 09:00 - Alice: Hi");
//! let csv = to_format_string(log.messages(), OutputFormat::Csv, &OutputConfig::new())?;
//! assert!(csv.contains("Alice;Hi"));
//!
//! let format = OutputFormat::from_path("turns.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::{OutputConfig, ToOutputRow};
use crate::error::ChatturnsError;

/// Output format for parsed records and merged turns.
///
/// # Example
///
/// ```rust
/// use chatturns::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatturnsError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatturnsError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format<R: ToOutputRow>(
    records: &[R],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatturnsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts records to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string<R: ToOutputRow>(
    records: &[R],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatturnsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: OutputFormat) -> ChatturnsError {
    ChatturnsError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("turns.jsonl").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_path("/path/to/file.JSON").unwrap(),
            OutputFormat::Json
        );
        let err = OutputFormat::from_path("chat.txt").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_format_default_and_names() {
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
        assert!(OutputFormat::all_names().contains(&"ndjson"));
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_dispatch() {
        use crate::ParsedMessage;

        let records = vec![ParsedMessage::new(0, "Hi").with_author("Alice")];
        let config = OutputConfig::new();

        let csv = to_format_string(&records, OutputFormat::Csv, &config).unwrap();
        assert!(csv.contains("Alice;Hi"));

        let jsonl = to_format_string(&records, OutputFormat::Jsonl, &config).unwrap();
        assert_eq!(jsonl.trim(), r#"{"author":"Alice","text":"Hi"}"#);
    }
}
