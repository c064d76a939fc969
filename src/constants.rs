//! Application constants for fitlog
//!
//! This module contains the canonical log schema, header alias tables,
//! parser tuning values, and default file locations used throughout the
//! fitlog application.

// =============================================================================
// Canonical Log Schema and Header Aliases
// =============================================================================

/// Canonical column order for serialized training logs
pub const CANONICAL_COLUMNS: &[&str] = &["date", "exercise", "weight", "reps", "sets"];

/// Recognized header spellings per canonical field
///
/// Producers write either German or English headers (in any casing); each
/// alias set maps onto one canonical field. Aliases are stored lowercase and
/// matched case-insensitively.
pub mod aliases {
    /// Aliases for the entry date column
    pub const DATE: &[&str] = &["date", "datum"];

    /// Aliases for the exercise label column
    pub const EXERCISE: &[&str] = &["exercise", "übung", "uebung"];

    /// Aliases for the weight column (kilograms)
    pub const WEIGHT: &[&str] = &["weight", "gewicht"];

    /// Aliases for the repetitions column
    pub const REPS: &[&str] = &["reps", "wiederholungen"];

    /// Aliases for the sets column
    pub const SETS: &[&str] = &["sets", "sätze", "saetze"];
}

// =============================================================================
// Parser Tuning
// =============================================================================

/// Delimiter candidates considered during detection, in tie-break order
pub const DELIMITER_CANDIDATES: &[char] = &[',', ';', '\t'];

/// Delimiter assumed when detection cannot decide (empty or ambiguous sample)
pub const DEFAULT_DELIMITER: char = ',';

/// Number of leading lines sampled for delimiter detection
pub const SNIFF_SAMPLE_LINES: usize = 10;

// =============================================================================
// Progress Analysis
// =============================================================================

/// Entries per window for the windowed progress comparison
pub const PROGRESS_WINDOW: usize = 7;

// =============================================================================
// Default File Locations
// =============================================================================

/// Application directory name under the platform data directory
pub const APP_DIR_NAME: &str = "fitlog";

/// Default training log file name
pub const LOG_FILE_NAME: &str = "training_log.csv";

/// Default profile file name
pub const PROFILE_FILE_NAME: &str = "profile.json";
