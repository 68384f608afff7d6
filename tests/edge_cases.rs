//! Edge case tests for chatturns
//!
//! Boundary conditions of the line format: malformed timestamps, missing
//! authors, stray separators and unusual characters.

use chatturns::ChatLogParser;
use chatturns::config::ParserConfig;
use chatturns::core::processor::merge_turns;

fn parse(body: &str) -> chatturns::ChatLog {
    ChatLogParser::new().parse_str(&format!("header\n{body}"))
}

// =========================================================================
// Timestamp edge cases
// =========================================================================

#[test]
fn test_impossible_date_is_non_standard() {
    let log = parse("31/02/2023, 09:00 - Alice: Hi");
    let msg = &log.messages()[0];

    assert!(msg.timestamp().is_none());
    assert!(msg.author().is_none());
    assert_eq!(msg.text(), "Hi");
    assert!(log.non_standard_rows().contains(0));
}

#[test]
fn test_out_of_range_time_is_non_standard() {
    let log = parse("01/01/2023, 25:61 - Alice: Hi");
    assert!(log.messages()[0].timestamp().is_none());
    assert_eq!(log.non_standard_rows().len(), 1);
}

#[test]
fn test_narrow_no_break_space_before_time() {
    let log = parse("01/01/2023,\u{202F}09:00 - Alice: Hi");
    let msg = &log.messages()[0];
    assert!(msg.timestamp().is_some());
    assert_eq!(msg.author(), Some("Alice"));
    assert_eq!(msg.text(), "Hi");
}

#[test]
fn test_multiple_spaces_before_time() {
    let log = parse("01/01/2023,   09:00 - Alice: Hi");
    assert!(log.messages()[0].timestamp().is_some());
}

#[test]
fn test_single_digit_day_does_not_match() {
    let log = parse("1/01/2023, 09:00 - Alice: Hi");
    assert!(log.messages()[0].timestamp().is_none());
    assert!(log.messages()[0].author().is_none());
}

#[test]
fn test_bracketed_twelve_hour_export_is_all_non_standard() {
    let log = parse(
        "[1/15/24, 10:30:00 AM] Alice: Hello\n[1/15/24, 10:31:00 AM] Bob: Hi",
    );
    assert_eq!(log.non_standard_rows().len(), 2);
    assert!(log.messages().iter().all(|m| m.author().is_none()));
    assert_eq!(log.messages()[0].text(), "[1/15/24, 10:30:00 AM] Alice: Hello");

    let turns = log.merge();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].message_count, 2);
}

// =========================================================================
// Separator and prefix quirks
// =========================================================================

#[test]
fn test_separator_removed_everywhere() {
    let log = parse("01/01/2023, 09:00 - Alice: a - b - c\nfree - text");
    assert_eq!(log.messages()[0].text(), "abc");
    assert_eq!(log.messages()[1].text(), "freetext");
}

#[test]
fn test_hyphen_without_spaces_is_kept() {
    let log = parse("01/01/2023, 09:00 - Alice: well-known e-mail");
    assert_eq!(log.messages()[0].text(), "well-known e-mail");
}

#[test]
fn test_continuation_line_prefix_is_stripped() {
    let log = parse("01/01/2023, 09:00 - Alice: List\nNote: buy milk");
    let msg = &log.messages()[1];
    assert!(msg.author().is_none());
    assert_eq!(msg.text(), "buy milk");
}

#[test]
fn test_colons_in_text_survive() {
    let log = parse("01/01/2023, 09:00 - Alice: Time: 10:00 sharp");
    let msg = &log.messages()[0];
    assert_eq!(msg.author(), Some("Alice"));
    assert_eq!(msg.text(), "Time: 10:00 sharp");
}

#[test]
fn test_system_notice_author_is_whole_line() {
    let log = parse("01/01/2023, 09:00 - Alice created group \"Trip\"");
    let msg = &log.messages()[0];
    assert!(msg.timestamp().is_some());
    assert_eq!(msg.author(), Some("Alice created group \"Trip\""));
    assert_eq!(msg.text(), "Alice created group \"Trip\"");
    // timestamped, so not non-standard
    assert!(log.non_standard_rows().is_empty());
}

#[test]
fn test_author_without_text_keeps_label() {
    let log = parse("01/01/2023, 09:00 - Alice:");
    let msg = &log.messages()[0];
    assert_eq!(msg.author(), Some("Alice"));
    assert_eq!(msg.text(), "Alice:");
}

#[test]
fn test_text_is_trimmed() {
    let log = parse("01/01/2023, 09:00 - Alice:    padded   \n   indented continuation  ");
    assert_eq!(log.messages()[0].text(), "padded");
    assert_eq!(log.messages()[1].text(), "indented continuation");
}

#[test]
fn test_blank_line_is_an_empty_record() {
    let log = parse("01/01/2023, 09:00 - Alice: Hi\n\n01/01/2023, 09:01 - Bob: Yo");
    assert_eq!(log.len(), 3);
    assert_eq!(log.messages()[1].text(), "");
    assert!(log.non_standard_rows().contains(1));
}

#[test]
fn test_empty_separator_leaves_text_alone() {
    let config = ParserConfig::new().with_separator("");
    let log = ChatLogParser::with_config(config)
        .unwrap()
        .parse_str("header\n01/01/2023, 09:00 - Alice: a - b");
    let msg = &log.messages()[0];
    // name pattern now sees " - Alice"
    assert_eq!(msg.author(), Some(" - Alice"));
    assert_eq!(msg.text(), "a - b");
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_authors_and_text() {
    let log = parse(
        "01/01/2023, 09:00 - Иван: Привет мир!
01/01/2023, 09:01 - 田中太郎: こんにちは世界！
01/01/2023, 09:02 - محمد: مرحبا بالعالم
01/01/2023, 09:03 - Mom 🎉: Hello 👋 World 🌍",
    );
    let authors: Vec<&str> = log.messages().iter().filter_map(|m| m.author()).collect();
    assert_eq!(authors, vec!["Иван", "田中太郎", "محمد", "Mom 🎉"]);
    assert_eq!(log.messages()[3].text(), "Hello 👋 World 🌍");
}

#[test]
fn test_phone_number_author() {
    let log = parse("01/01/2023, 09:00 - +1 555-123-4567: Who is this?");
    assert_eq!(log.messages()[0].author(), Some("+1 555-123-4567"));
    assert_eq!(log.messages()[0].text(), "Who is this?");
}

#[test]
fn test_zero_width_characters_in_author() {
    let log = parse("01/01/2023, 09:00 - User\u{200B}Name: hi");
    assert_eq!(log.messages()[0].author(), Some("User\u{200B}Name"));
}

#[test]
fn test_very_long_line() {
    let long = "x".repeat(100 * 1024);
    let log = parse(&format!("01/01/2023, 09:00 - Alice: {long}"));
    assert_eq!(log.messages()[0].text().len(), 100 * 1024);
}

// =========================================================================
// Merge edge cases
// =========================================================================

#[test]
fn test_two_records_different_authors() {
    let log = parse("01/01/2023, 09:00 - Alice: Hi\n01/01/2023, 09:01 - Bob: Yo");
    let turns = log.merge();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].text, "Hi <eom>");
}

#[test]
fn test_single_record_produces_nothing() {
    let log = parse("01/01/2023, 09:00 - Alice: Hi");
    assert_eq!(log.len(), 1);
    assert!(log.merge().is_empty());
}

#[test]
fn test_empty_log_merges_to_nothing() {
    let log = ChatLogParser::new().parse_str("");
    assert!(log.is_empty());
    assert!(log.merge().is_empty());
    assert_eq!(log.stats(&[]).compression_ratio(), 0.0);
}

#[test]
fn test_marker_inside_text_is_not_special() {
    let log = parse("01/01/2023, 09:00 - Alice: a <eom> b\n01/01/2023, 09:01 - Alice: c");
    let turns = merge_turns(log.messages(), "<eom>");
    assert_eq!(turns[0].text, "a <eom> b <eom> c <eom>");
    assert_eq!(turns[0].message_count, 2);
}

#[test]
fn test_author_absent_rows_group_with_each_other_only() {
    let log = parse(
        "01/01/2023, 09:00 - Alice: photo
<Media omitted>
second caption line
01/01/2023, 09:01 - Alice: back
01/01/2023, 09:02 - Bob: ok",
    );
    let turns = log.merge();
    let authors: Vec<Option<&str>> = turns.iter().map(|t| t.author()).collect();
    assert_eq!(authors, vec![Some("Alice"), None, Some("Alice")]);
    assert_eq!(turns[1].text, "<Media omitted> <eom> second caption line <eom>");
}

#[test]
fn test_system_notice_does_not_merge_with_non_standard_row() {
    let log = parse(
        "<Media omitted>
01/01/2023, 09:00 - Alice added Bob
01/01/2023, 09:01 - Bob: hi",
    );
    let notice = &log.messages()[1];
    assert!(notice.timestamp().is_some());
    assert_eq!(notice.author(), Some("Alice added Bob"));
    assert_eq!(notice.text(), "Alice added Bob");

    let turns = log.merge();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].author(), None);
    assert_eq!(turns[0].text, "<Media omitted> <eom>");
    assert_eq!(turns[1].author(), Some("Alice added Bob"));
    assert_eq!(turns[1].message_count, 1);
}

#[test]
fn test_every_standard_row_has_an_author() {
    let log = parse(
        "01/01/2023, 09:00 - Alice: Hi
01/01/2023, 09:01 - Alice left
continuation
01/01/2023, 09:02 - Messages to this group are now secured",
    );
    for msg in log.messages() {
        assert_eq!(msg.author().is_some(), msg.is_standard());
    }
}
