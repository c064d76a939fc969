//! Core log parser implementation
//!
//! This module provides the main parser orchestration: delimiter detection
//! over a leading sample, header analysis, and per-record validation with
//! skip-and-continue error handling.

use std::path::Path;

use tracing::{debug, info, warn};

use super::column_map::{ColumnMap, LogField};
use super::delimiter::detect_delimiter;
use super::record_parser::parse_log_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::TrainingEntry;
use crate::constants::SNIFF_SAMPLE_LINES;

/// Parser for free-form training log files
///
/// The parser is stateless and total: every input, including a missing
/// file, yields a result. Defects are confined to the record they occur
/// in — a row with broken quoting or the wrong column count is skipped and
/// parsing continues with the next row.
#[derive(Debug, Default)]
pub struct LogParser;

impl LogParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a log file and return entries with statistics.
    ///
    /// A missing or unreadable file yields an empty result rather than an
    /// error; historical data access must never take the caller down.
    pub fn parse_file(&self, file_path: &Path) -> ParseResult {
        info!("Parsing training log: {}", file_path.display());

        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Log file not readable ({}), treating as empty", e);
                return ParseResult::empty();
            }
        };

        self.parse_text(&content)
    }

    /// Parse raw log text and return entries with statistics
    pub fn parse_text(&self, raw_text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut entries = Vec::new();

        if raw_text.trim().is_empty() {
            return ParseResult::empty();
        }

        let sample = leading_sample(raw_text);
        let delimiter = detect_delimiter(&sample);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(true)
            .from_reader(raw_text.as_bytes());

        let columns = match csv_reader.headers() {
            Ok(headers) => ColumnMap::analyze(headers),
            Err(e) => {
                warn!("Failed to read log header row: {}", e);
                return ParseResult::empty();
            }
        };

        if !columns.has_field(LogField::Date) {
            debug!("No recognized date column among {} headers", columns.column_count());
        }

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(record) => match parse_log_record(&record, &columns) {
                    Ok(entry) => {
                        entries.push(entry);
                        stats.entries_parsed += 1;
                    }
                    Err(e) => {
                        stats.records_skipped += 1;
                        stats
                            .errors
                            .push(format!("Record {}: {}", stats.total_records, e));
                        debug!("Skipped record {}: {}", stats.total_records, e);
                    }
                },
                Err(e) => {
                    stats.records_skipped += 1;
                    stats.errors.push(format!(
                        "CSV parse error at record {}: {}",
                        stats.total_records, e
                    ));
                }
            }
        }

        info!(
            "Parsed {} entries from {} records",
            stats.entries_parsed, stats.total_records
        );

        ParseResult { entries, stats }
    }
}

/// Parse raw log text into entries, discarding statistics.
///
/// Convenience entry point for callers that only need the sequence.
pub fn parse_log(raw_text: &str) -> Vec<TrainingEntry> {
    LogParser::new().parse_text(raw_text).entries
}

/// First few lines of the text, for delimiter detection
fn leading_sample(raw_text: &str) -> String {
    raw_text
        .lines()
        .take(SNIFF_SAMPLE_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}
