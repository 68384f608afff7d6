//! Turn merging and processing statistics.

use tracing::debug;

use crate::{MergedTurn, ParsedMessage};

/// Merges consecutive messages from the same author into turns.
///
/// Every member text is followed by `" " + marker` and members are joined
/// by a single space. Rows without an author group together as their own
/// "author".
///
/// A run can only start before the final record, so a single trailing
/// message from a new author is not emitted. A run that starts earlier
/// and reaches the end is kept whole.
///
/// # Example
///
/// ```rust
/// use chatturns::ParsedMessage;
/// use chatturns::core::processor::merge_turns;
///
/// let messages = vec![
///     ParsedMessage::new(0, "Hi").with_author("Alice"),
///     ParsedMessage::new(1, "How are you?").with_author("Alice"),
///     ParsedMessage::new(2, "Good thanks").with_author("Bob"),
/// ];
///
/// let turns = merge_turns(&messages, "<eom>");
/// assert_eq!(turns.len(), 1);
/// assert_eq!(turns[0].text, "Hi <eom> How are you? <eom>");
/// ```
pub fn merge_turns(messages: &[ParsedMessage], marker: &str) -> Vec<MergedTurn> {
    let last = messages.len().saturating_sub(1);
    let mut turns: Vec<MergedTurn> = Vec::new();
    let mut start = 0;

    while start < messages.len() {
        let author = &messages[start].author;
        let end = messages[start..]
            .iter()
            .position(|m| &m.author != author)
            .map_or(messages.len(), |len| start + len);

        if start < last {
            turns.push(build_turn(turns.len(), &messages[start..end], marker));
        } else {
            debug!(index = start, "dropping trailing single-message run");
        }
        start = end;
    }

    debug!(
        messages = messages.len(),
        turns = turns.len(),
        "merged consecutive messages"
    );
    turns
}

fn build_turn(index: usize, run: &[ParsedMessage], marker: &str) -> MergedTurn {
    let mut text = String::new();
    for (i, msg) in run.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(&msg.text);
        text.push(' ');
        text.push_str(marker);
    }

    MergedTurn {
        index,
        author: run[0].author.clone(),
        text,
        message_count: run.len(),
        started_at: run[0].timestamp,
    }
}

/// Statistics about a parse-and-merge run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub original_count: usize,
    pub non_standard_count: usize,
    pub merged_count: usize,
}

impl ProcessingStats {
    pub fn new(original_count: usize, non_standard_count: usize, merged_count: usize) -> Self {
        Self {
            original_count,
            non_standard_count,
            merged_count,
        }
    }

    /// Percentage reduction from records to turns.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (1.0 - (self.merged_count as f64 / self.original_count as f64)) * 100.0
    }
}
