//! Delimiter detection for training log files
//!
//! Producers export logs with comma, semicolon or tab separators. Detection
//! runs over a small leading sample and must be deterministic: the same
//! sample always yields the same delimiter.

use tracing::debug;

use crate::constants::{DEFAULT_DELIMITER, DELIMITER_CANDIDATES, SNIFF_SAMPLE_LINES};

/// Detect the field delimiter used by a log file.
///
/// A consistency sniff runs first: a candidate qualifies when every
/// non-empty sample line contains the same positive number of occurrences.
/// Among qualifying candidates the highest per-line count wins, so a
/// semicolon-separated file full of decimal commas resolves to the
/// semicolon (the header line carries no decimal commas, and separators
/// outnumber decimals on data lines). If no candidate qualifies, raw
/// occurrence counting over the whole sample decides, and an empty or
/// tie-bound sample falls back to the comma.
pub fn detect_delimiter(sample: &str) -> char {
    let delimiter = sniff_consistent(sample).unwrap_or_else(|| count_occurrences(sample));
    debug!("Detected delimiter: {:?}", delimiter);
    delimiter
}

/// Consistency heuristic over the leading sample lines
fn sniff_consistent(sample: &str) -> Option<char> {
    let lines: Vec<&str> = sample
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return None;
    }

    let mut best: Option<(char, usize)> = None;
    for &candidate in DELIMITER_CANDIDATES {
        let per_line = lines[0].matches(candidate).count();
        if per_line == 0 {
            continue;
        }
        if !lines
            .iter()
            .all(|line| line.matches(candidate).count() == per_line)
        {
            continue;
        }
        // Strictly-greater keeps the earlier candidate on ties (comma first)
        match best {
            Some((_, count)) if per_line <= count => {}
            _ => best = Some((candidate, per_line)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

/// Fallback: most frequent candidate across the raw sample text
fn count_occurrences(sample: &str) -> char {
    let mut best = DEFAULT_DELIMITER;
    let mut best_count = 0;

    for &candidate in DELIMITER_CANDIDATES {
        let count = sample.matches(candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}
