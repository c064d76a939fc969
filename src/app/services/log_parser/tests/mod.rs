//! Test utilities and fixtures for log parser testing
//!
//! This module provides sample log content in the shapes real producers
//! emit, plus helper functions shared across the test modules.

use std::io::Write;

use tempfile::NamedTempFile;

mod delimiter_tests;
mod parser_tests;
mod record_tests;

/// Canonical English comma-separated log
pub fn create_english_log() -> String {
    "date,exercise,weight,reps,sets\n\
     2025-06-01,squat,100,5,3\n\
     2025-06-03,bench,60,8,3\n\
     2025-06-05,squat,102.5,5,3\n"
        .to_string()
}

/// German semicolon-separated log with decimal commas and mixed casing
pub fn create_german_log() -> String {
    "Datum;Übung;Gewicht;Wiederholungen;Sätze\n\
     2025-06-01;Kniebeuge;82,5;5;3\n\
     2025-06-03;Bankdrücken;57,5;8;3\n"
        .to_string()
}

/// Tab-separated log with an extra legacy week column
pub fn create_tab_log() -> String {
    "date\tweek\texercise\tweight\treps\tsets\n\
     2025-06-01\t23\tsquat\t100\t5\t3\n\
     2025-06-03\t23\tdeadlift\t140\t3\t2\n"
        .to_string()
}

/// Log with assorted defects: corrupt numbers, a missing date, a row with
/// the wrong column count
pub fn create_messy_log() -> String {
    "date,exercise,weight,reps,sets\n\
     2025-06-01,squat,abc,5,3\n\
     ,ghost,100,5,3\n\
     2025-06-02,bench,60,8\n\
     2025-06-03,row,50,xyz,\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
