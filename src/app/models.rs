//! Core data structures for fitlog.
//!
//! Defines the canonical training entry produced by the log parser, the
//! user profile consumed by the energy budget calculator, and the derived
//! value objects returned by the metrics engines.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One logged set/session from a training log.
///
/// Constructed exclusively by the log parser and immutable afterwards.
/// `date` is a non-empty ISO-formatted calendar date; numeric fields are
/// non-negative and default to zero when the source cell was corrupt.
/// Entries keep their file-append order (oldest first) and are never
/// resorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEntry {
    /// Calendar date of the session (ISO format, never empty)
    pub date: String,

    /// Free-text exercise label (may be empty, never absent)
    pub exercise: String,

    /// Weight moved, in kilograms
    pub weight: f64,

    /// Repetitions per set
    pub reps: u32,

    /// Number of sets
    pub sets: u32,
}

impl TrainingEntry {
    /// Performance value of this entry: weight × reps.
    ///
    /// Sets are logged but excluded from the performance value.
    pub fn performance(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// Biological sex used by the Mifflin-St Jeor formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Activity tier scaling basal expenditure to total daily expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
    Extreme,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily expenditure
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }
}

/// Weekly body-weight goal, each tier mapping to a fixed calorie delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Lose ~0.5 kg per week
    LoseHalfKg,
    /// Lose ~0.25 kg per week
    LoseQuarterKg,
    /// Hold current weight
    Maintain,
    /// Gain ~0.25 kg per week
    GainQuarterKg,
    /// Gain ~0.5 kg per week
    GainHalfKg,
}

impl Goal {
    /// Daily calorie delta applied additively to TDEE
    pub fn calorie_delta(&self) -> f64 {
        match self {
            Goal::LoseHalfKg => -500.0,
            Goal::LoseQuarterKg => -250.0,
            Goal::Maintain => 0.0,
            Goal::GainQuarterKg => 250.0,
            Goal::GainHalfKg => 500.0,
        }
    }
}

/// Physiological and goal inputs required to compute a calorie budget.
///
/// Supplied fully typed by the intake layer; the budget calculator does not
/// re-validate these fields and will propagate nonsensical output (e.g. a
/// negative BMR from an impossible height/weight combination) rather than
/// silently correct it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years
    pub age: u32,

    /// Biological sex
    pub sex: Sex,

    /// Height in centimeters
    pub height_cm: f64,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Activity tier
    pub activity_level: ActivityLevel,

    /// Weekly weight goal
    pub goal: Goal,
}

/// Derived energy budget, recomputed on demand and never cached.
///
/// All values are carried unrounded; use [`CalorieBudget::rounded`] when
/// formatting for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieBudget {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,

    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,

    /// Calorie delta implied by the goal tier (kcal/day)
    pub goal_delta: f64,

    /// Daily calorie target: tdee + goal_delta (kcal/day)
    pub target_kcal: f64,
}

impl CalorieBudget {
    /// Copy of this budget with every value rounded to the nearest whole
    /// calorie, for display
    pub fn rounded(&self) -> CalorieBudget {
        CalorieBudget {
            bmr: self.bmr.round(),
            tdee: self.tdee.round(),
            goal_delta: self.goal_delta.round(),
            target_kcal: self.target_kcal.round(),
        }
    }
}

/// Comparison of the most recent entry against the immediately preceding one
///
/// Values are performance values (weight × reps) of the two entries in the
/// (optionally exercise-filtered) sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    /// Date of the most recent entry
    pub current_date: String,

    /// Performance value of the most recent entry
    pub current_value: f64,

    /// Date of the entry before it
    pub previous_date: String,

    /// Performance value of the entry before it
    pub previous_value: f64,

    /// Signed difference: current_value − previous_value
    pub delta: f64,
}

/// Comparison of the last window of entries against the window before it
///
/// Weight and reps are averaged independently per window; an empty prior
/// window averages to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowComparison {
    /// Average weight over the most recent window (kg)
    pub avg_weight_recent: f64,

    /// Average weight over the preceding window (kg)
    pub avg_weight_prior: f64,

    /// Average reps over the most recent window
    pub avg_reps_recent: f64,

    /// Average reps over the preceding window
    pub avg_reps_prior: f64,
}
