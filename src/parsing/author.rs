//! Second pipeline stage: leading author extraction.

use regex::Regex;

use super::NonStandardRows;

/// Output of [`extract_authors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPass {
    /// One entry per input line, aligned by index.
    pub authors: Vec<Option<String>>,
    /// Final message texts.
    pub lines: Vec<String>,
}

/// Finds the author label at the start of a standard row.
///
/// With the default pattern a line without a colon (a system notice such as
/// `Alice added Bob`) yields the whole line. `None` only when the pattern
/// matches nothing, e.g. an empty line or one starting with `:`.
pub fn find_author<'a>(line: &'a str, name: &Regex) -> Option<&'a str> {
    name.find(line).map(|m| m.as_str())
}

/// Extracts authors for standard rows and strips the `author: ` prefix.
///
/// Non-standard rows never get an author, but the prefix strip runs on every
/// row: a continuation line such as `Note: buy milk` comes out as
/// `buy milk`.
pub fn extract_authors(
    lines: Vec<String>,
    non_standard: &NonStandardRows,
    name: &Regex,
    prefix: &Regex,
) -> AuthorPass {
    let authors = lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            if non_standard.contains(row) {
                None
            } else {
                find_author(line, name).map(str::to_string)
            }
        })
        .collect();

    let lines = lines
        .iter()
        .map(|line| prefix.replace(line, "").trim().to_string())
        .collect();

    AuthorPass { authors, lines }
}
