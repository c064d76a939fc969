//! Parser for free-form fitness log files
//!
//! This module turns loosely-structured, multi-producer training logs into
//! the canonical [`TrainingEntry`](crate::app::models::TrainingEntry) model.
//! Producers disagree on delimiter (comma, semicolon, tab), header language
//! (German or English, any casing) and decimal separator; the parser absorbs
//! all of that and degrades gracefully on corrupt cells instead of dropping
//! whole sessions.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`delimiter`] - Delimiter detection over a leading sample
//! - [`column_map`] - Bilingual header resolution onto canonical fields
//! - [`record_parser`] - Individual record validation
//! - [`field_parsers`] - Tolerant field extraction and numeric normalization
//! - [`writer`] - Canonical re-serialization of parsed entries
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use fitlog::app::services::log_parser::parse_log;
//!
//! let entries = parse_log("date,exercise,weight,reps,sets\n2025-06-01,squat,100,5,3\n");
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].exercise, "squat");
//! ```

pub mod column_map;
pub mod delimiter;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_map::{ColumnMap, LogField};
pub use delimiter::detect_delimiter;
pub use parser::{LogParser, parse_log};
pub use stats::{ParseResult, ParseStats};
pub use writer::write_canonical;
