//! First pipeline stage: leading timestamp extraction.

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::{trace, warn};

use super::NonStandardRows;

/// Output of [`extract_timestamps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampPass {
    /// One entry per input line, aligned by index.
    pub timestamps: Vec<Option<NaiveDateTime>>,
    /// Lines with the timestamp token and every separator removed.
    pub lines: Vec<String>,
    /// Rows whose timestamp could not be extracted.
    pub non_standard: NonStandardRows,
}

/// Parses a matched timestamp token.
///
/// Whitespace runs (including the narrow no-break space newer exports put
/// before the time) are collapsed to one ASCII space first. Returns `None`
/// when the token matched the pattern but is not a real calendar date or
/// time (e.g. `31/02/2023, 10:00`).
pub fn parse_timestamp(token: &str, datetime_format: &str) -> Option<NaiveDateTime> {
    let normalized = token.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&normalized, datetime_format).ok()
}

/// Extracts the leading timestamp from every line.
///
/// The stripping step runs on every row: the pattern match (if any) is
/// removed, then every occurrence of `separator` anywhere in the line.
/// A non-standard row like `Hello - world` therefore ends up as
/// `Helloworld`.
pub fn extract_timestamps(
    lines: Vec<String>,
    pattern: &Regex,
    datetime_format: &str,
    separator: &str,
) -> TimestampPass {
    let mut timestamps = Vec::with_capacity(lines.len());
    let mut non_standard = NonStandardRows::new();

    for (row, line) in lines.iter().enumerate() {
        let parsed = pattern.find(line).and_then(|m| {
            let ts = parse_timestamp(m.as_str(), datetime_format);
            if ts.is_none() {
                warn!(
                    row,
                    token = m.as_str(),
                    "timestamp token does not parse, treating row as non-standard"
                );
            }
            ts
        });

        if parsed.is_none() {
            trace!(row, "non-standard row");
            non_standard.insert(row);
        }
        timestamps.push(parsed);
    }

    let lines = lines
        .into_iter()
        .map(|line| strip_timestamp(&line, pattern, separator))
        .collect();

    TimestampPass {
        timestamps,
        lines,
        non_standard,
    }
}

fn strip_timestamp(line: &str, pattern: &Regex, separator: &str) -> String {
    let stripped = pattern.replace(line, "");
    if separator.is_empty() {
        stripped.into_owned()
    } else {
        stripped.replace(separator, "")
    }
}
