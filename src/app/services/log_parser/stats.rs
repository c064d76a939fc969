//! Parsing statistics and result structures for log ingestion
//!
//! Callers that only need the entries can take `ParseResult::entries`; the
//! statistics exist for reporting and debugging skipped records.

use crate::app::models::TrainingEntry;

/// Parsing result with entries and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully validated entries, in file-append order
    pub entries: Vec<TrainingEntry>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// An empty result (missing or empty source)
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            stats: ParseStats::new(),
        }
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data records encountered
    pub total_records: usize,

    /// Number of entries successfully validated
    pub entries_parsed: usize,

    /// Number of records skipped due to errors
    pub records_skipped: usize,

    /// List of skip reasons for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            entries_parsed: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.entries_parsed as f64 / self.total_records as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
