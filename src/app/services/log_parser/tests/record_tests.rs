//! Tests for numeric normalization and record validation

use csv::StringRecord;

use crate::app::services::log_parser::column_map::ColumnMap;
use crate::app::services::log_parser::field_parsers::{normalize_float, normalize_int};
use crate::app::services::log_parser::record_parser::parse_log_record;

fn canonical_map() -> ColumnMap {
    let headers = StringRecord::from(vec!["date", "exercise", "weight", "reps", "sets"]);
    ColumnMap::analyze(&headers)
}

#[test]
fn test_normalize_float_decimal_comma() {
    assert_eq!(normalize_float(Some("70,5")), 70.5);
    assert_eq!(normalize_float(Some("70.5")), 70.5);
}

#[test]
fn test_normalize_float_trims_whitespace() {
    assert_eq!(normalize_float(Some("  82,5 ")), 82.5);
}

#[test]
fn test_normalize_float_garbage_is_zero() {
    assert_eq!(normalize_float(Some("abc")), 0.0);
    assert_eq!(normalize_float(Some("")), 0.0);
    assert_eq!(normalize_float(None), 0.0);
    assert_eq!(normalize_float(Some("1.2.3")), 0.0);
}

#[test]
fn test_normalize_float_floors_negatives() {
    assert_eq!(normalize_float(Some("-5")), 0.0);
}

#[test]
fn test_normalize_int_truncates_through_float() {
    assert_eq!(normalize_int(Some("12,0")), 12);
    assert_eq!(normalize_int(Some("12.7")), 12);
    assert_eq!(normalize_int(Some("12")), 12);
    assert_eq!(normalize_int(Some("xyz")), 0);
    assert_eq!(normalize_int(None), 0);
}

#[test]
fn test_valid_record() {
    let record = StringRecord::from(vec!["2025-06-01", "squat", "102,5", "5", "3"]);
    let entry = parse_log_record(&record, &canonical_map()).unwrap();
    assert_eq!(entry.date, "2025-06-01");
    assert_eq!(entry.exercise, "squat");
    assert_eq!(entry.weight, 102.5);
    assert_eq!(entry.reps, 5);
    assert_eq!(entry.sets, 3);
}

#[test]
fn test_empty_date_is_rejected() {
    let record = StringRecord::from(vec!["   ", "squat", "100", "5", "3"]);
    assert!(parse_log_record(&record, &canonical_map()).is_err());
}

#[test]
fn test_corrupt_numerics_degrade_to_zero() {
    // A numeric typo must not erase the workout record.
    let record = StringRecord::from(vec!["2025-06-01", "squat", "oops", "5", ""]);
    let entry = parse_log_record(&record, &canonical_map()).unwrap();
    assert_eq!(entry.weight, 0.0);
    assert_eq!(entry.reps, 5);
    assert_eq!(entry.sets, 0);
}

#[test]
fn test_empty_exercise_is_kept() {
    let record = StringRecord::from(vec!["2025-06-01", "", "100", "5", "3"]);
    let entry = parse_log_record(&record, &canonical_map()).unwrap();
    assert_eq!(entry.exercise, "");
    assert_eq!(entry.weight, 100.0);
}

#[test]
fn test_date_and_exercise_are_trimmed() {
    let record = StringRecord::from(vec![" 2025-06-01 ", " squat ", "100", "5", "3"]);
    let entry = parse_log_record(&record, &canonical_map()).unwrap();
    assert_eq!(entry.date, "2025-06-01");
    assert_eq!(entry.exercise, "squat");
}
