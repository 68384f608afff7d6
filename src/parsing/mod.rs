//! Line-level extraction stages.
//!
//! The parser runs these as a pipeline of pure functions, each taking the
//! previous stage's working lines and returning new ones:
//!
//! 1. [`extract_timestamps`] - leading `DD/MM/YYYY, HH:MM` token
//! 2. [`extract_authors`] - leading `Author:` label
//! 3. [`assemble_records`] - zip everything into [`ParsedMessage`]s

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::ParsedMessage;

pub mod author;
pub mod timestamp;

pub use author::{AuthorPass, extract_authors, find_author};
pub use timestamp::{TimestampPass, extract_timestamps, parse_timestamp};

/// Indices of rows whose leading timestamp could not be extracted.
///
/// Author extraction skips these rows so that continuation lines like
/// `Note: buy milk` are not mistaken for messages from "Note".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonStandardRows(BTreeSet<usize>);

impl NonStandardRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: usize) {
        self.0.insert(row);
    }

    pub fn contains(&self, row: usize) -> bool {
        self.0.contains(&row)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates row indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for NonStandardRows {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Builds the regex that strips `<name>: ` from the start of a line.
pub fn author_prefix_pattern(name_pattern: &str) -> String {
    format!("{name_pattern}: ")
}

/// Zips the per-row stage outputs into records indexed from zero.
pub fn assemble_records(
    timestamps: Vec<Option<NaiveDateTime>>,
    authors: Vec<Option<String>>,
    texts: Vec<String>,
) -> Vec<ParsedMessage> {
    debug_assert_eq!(timestamps.len(), authors.len());
    debug_assert_eq!(timestamps.len(), texts.len());

    timestamps
        .into_iter()
        .zip(authors)
        .zip(texts)
        .enumerate()
        .map(|(index, ((timestamp, author), text))| ParsedMessage {
            index,
            timestamp,
            author,
            text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_standard_rows_ordered() {
        let rows: NonStandardRows = [5, 1, 3].into_iter().collect();
        assert_eq!(rows.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(rows.len(), 3);
        assert!(rows.contains(3));
        assert!(!rows.contains(2));
    }

    #[test]
    fn test_author_prefix_pattern() {
        assert_eq!(author_prefix_pattern("^[^:]+"), "^[^:]+: ");
    }

    #[test]
    fn test_assemble_records_indices() {
        let records = assemble_records(
            vec![None, None],
            vec![Some("Alice".into()), None],
            vec!["a".into(), "b".into()],
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].author(), Some("Alice"));
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].text, "b");
    }
}
