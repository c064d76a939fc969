//! Tests for the main log parser orchestration

use std::path::Path;

use super::{create_english_log, create_german_log, create_messy_log, create_tab_log,
            create_temp_file};
use crate::app::services::log_parser::{LogParser, parse_log};

#[test]
fn test_parse_english_log() {
    let result = LogParser::new().parse_text(&create_english_log());
    assert_eq!(result.entries.len(), 3);
    assert_eq!(result.stats.total_records, 3);
    assert_eq!(result.stats.records_skipped, 0);

    let entry = &result.entries[2];
    assert_eq!(entry.date, "2025-06-05");
    assert_eq!(entry.exercise, "squat");
    assert_eq!(entry.weight, 102.5);
}

#[test]
fn test_parse_german_log() {
    let entries = parse_log(&create_german_log());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].exercise, "Kniebeuge");
    assert_eq!(entries[0].weight, 82.5);
    assert_eq!(entries[1].exercise, "Bankdrücken");
    assert_eq!(entries[1].weight, 57.5);
    assert_eq!(entries[1].reps, 8);
}

#[test]
fn test_parse_tab_log_ignores_extra_columns() {
    let entries = parse_log(&create_tab_log());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].exercise, "squat");
    assert_eq!(entries[1].weight, 140.0);
}

#[test]
fn test_messy_log_degrades_per_row() {
    let result = LogParser::new().parse_text(&create_messy_log());

    // Corrupt weight degrades to zero, the dateless row is skipped, the
    // short row is skipped, the corrupt-reps row survives with zeros.
    assert_eq!(result.stats.total_records, 4);
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.stats.records_skipped, 2);
    assert_eq!(result.stats.errors.len(), 2);

    assert_eq!(result.entries[0].exercise, "squat");
    assert_eq!(result.entries[0].weight, 0.0);
    assert_eq!(result.entries[0].reps, 5);

    assert_eq!(result.entries[1].exercise, "row");
    assert_eq!(result.entries[1].reps, 0);
    assert_eq!(result.entries[1].sets, 0);
}

#[test]
fn test_every_dated_row_survives() {
    // Output length never exceeds the number of data rows, and every row
    // with a non-empty date is kept.
    let text = create_english_log();
    let data_rows = text.lines().count() - 1;
    let result = LogParser::new().parse_text(&text);
    assert!(result.entries.len() <= data_rows);
    assert_eq!(result.entries.len(), data_rows);
}

#[test]
fn test_entries_keep_file_order() {
    let text = "date,exercise,weight,reps,sets\n\
                2025-06-05,late,100,5,3\n\
                2025-06-01,early,100,5,3\n";
    let entries = parse_log(text);
    // Append order, not date order
    assert_eq!(entries[0].exercise, "late");
    assert_eq!(entries[1].exercise, "early");
}

#[test]
fn test_empty_text_yields_empty_sequence() {
    assert!(parse_log("").is_empty());
    assert!(parse_log("   \n  \n").is_empty());
}

#[test]
fn test_header_only_yields_empty_sequence() {
    let result = LogParser::new().parse_text("date,exercise,weight,reps,sets\n");
    assert!(result.entries.is_empty());
    assert_eq!(result.stats.total_records, 0);
}

#[test]
fn test_missing_file_yields_empty_sequence() {
    let result = LogParser::new().parse_file(Path::new("/nonexistent/training_log.csv"));
    assert!(result.entries.is_empty());
}

#[test]
fn test_parse_file_round() {
    let temp_file = create_temp_file(&create_german_log());
    let result = LogParser::new().parse_file(temp_file.path());
    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[0].weight, 82.5);
}

#[test]
fn test_quoted_fields_survive() {
    let text = "date,exercise,weight,reps,sets\n\
                2025-06-01,\"clean, hang\",60,3,5\n";
    let entries = parse_log(text);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].exercise, "clean, hang");
}

#[test]
fn test_success_rate() {
    let result = LogParser::new().parse_text(&create_messy_log());
    assert_eq!(result.stats.success_rate(), 50.0);

    let clean = LogParser::new().parse_text(&create_english_log());
    assert_eq!(clean.stats.success_rate(), 100.0);
}
