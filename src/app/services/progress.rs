//! Training progress comparison
//!
//! Two reporting modes over the ordered entry sequence:
//!
//! - [`compare_latest`] — the most recent entry against the one before it,
//!   on the combined performance value (weight × reps), optionally
//!   restricted to a single exercise. Suits "did my squat move?" questions.
//! - [`compare_windows`] — the last seven entries against the up-to-seven
//!   before them, averaging weight and reps independently. Suits the
//!   unfiltered dashboard view.
//!
//! Both are pure over the sequence they receive, preserve its order, and
//! return [`Insufficient`] instead of failing when the history is too
//! short.

use tracing::debug;

use crate::app::models::{PairComparison, TrainingEntry, WindowComparison};
use crate::constants::PROGRESS_WINDOW;

/// Returned when the entry history is too short to compare
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct Insufficient {
    /// Human-readable explanation
    pub reason: String,
}

impl Insufficient {
    fn no_entries() -> Self {
        Self {
            reason: "no entries".to_string(),
        }
    }

    fn not_enough_for_exercise() -> Self {
        Self {
            reason: "not enough entries for this exercise".to_string(),
        }
    }
}

/// Compare the most recent entry against the immediately preceding one.
///
/// With `exercise_filter` set, only entries whose exercise label matches
/// case-insensitively take part, in their original order. Needs at least
/// two qualifying entries.
pub fn compare_latest(
    entries: &[TrainingEntry],
    exercise_filter: Option<&str>,
) -> Result<PairComparison, Insufficient> {
    let filtered: Vec<&TrainingEntry> = match exercise_filter {
        Some(filter) => {
            let wanted = filter.trim().to_lowercase();
            entries
                .iter()
                .filter(|entry| entry.exercise.to_lowercase() == wanted)
                .collect()
        }
        None => entries.iter().collect(),
    };

    if filtered.is_empty() {
        return Err(Insufficient::no_entries());
    }
    if filtered.len() < 2 {
        return Err(match exercise_filter {
            Some(_) => Insufficient::not_enough_for_exercise(),
            None => Insufficient::no_entries(),
        });
    }

    let current = filtered[filtered.len() - 1];
    let previous = filtered[filtered.len() - 2];
    debug!(
        "Comparing {} against {}",
        current.date, previous.date
    );

    Ok(PairComparison {
        current_date: current.date.clone(),
        current_value: current.performance(),
        previous_date: previous.date.clone(),
        previous_value: previous.performance(),
        delta: current.performance() - previous.performance(),
    })
}

/// Compare the last window of entries against the window before it.
///
/// Takes the most recent `2 × PROGRESS_WINDOW` entries, splits off the last
/// `PROGRESS_WINDOW` as the recent block and leaves the remainder (possibly
/// fewer) as the prior block, then averages weight and reps per block. An
/// empty prior block averages to zero.
pub fn compare_windows(entries: &[TrainingEntry]) -> Result<WindowComparison, Insufficient> {
    if entries.len() < 2 {
        return Err(Insufficient::no_entries());
    }

    let tail_start = entries.len().saturating_sub(2 * PROGRESS_WINDOW);
    let tail = &entries[tail_start..];
    let split = tail.len().saturating_sub(PROGRESS_WINDOW);
    let (prior, recent) = tail.split_at(split);

    Ok(WindowComparison {
        avg_weight_recent: average(recent, |e| e.weight),
        avg_weight_prior: average(prior, |e| e.weight),
        avg_reps_recent: average(recent, |e| f64::from(e.reps)),
        avg_reps_prior: average(prior, |e| f64::from(e.reps)),
    })
}

fn average(entries: &[TrainingEntry], value: impl Fn(&TrainingEntry) -> f64) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(value).sum::<f64>() / entries.len() as f64
}
