//! Command-line argument definitions for fitlog
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Shared file-location and verbosity options are global; each
//! subcommand carries only its own inputs.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::app::models::{ActivityLevel, Goal, Sex};
use crate::{Error, Result};

/// CLI arguments for the fitlog training tracker
///
/// Ingests delimited training logs written by multiple producers (German or
/// English headers, auto-detected delimiter, locale decimals) and derives a
/// calorie budget and training-progress reports from them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fitlog",
    version,
    about = "Track training sessions and derive calorie and progress reports",
    long_about = "A training log and energy-budget tool. Log files are plain delimited text \
                  and may come from other programs: the parser auto-detects the delimiter, \
                  accepts German and English column headers in any casing, and tolerates \
                  locale decimal commas and corrupt cells without losing whole sessions."
)]
pub struct Args {
    /// Directory holding the training log and profile
    ///
    /// Defaults to the platform data directory (e.g. ~/.local/share/fitlog).
    #[arg(long = "data-dir", value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Training log file to use instead of the one in the data directory
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Profile file to use instead of the one in the data directory
    #[arg(long = "profile-file", value_name = "FILE", global = true)]
    pub profile_file: Option<PathBuf>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for fitlog
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show profile summary with calorie budget (BMR, TDEE, daily target)
    Dashboard,

    /// Compare recent training activity against prior activity
    Progress(ProgressArgs),

    /// Add, list, or remove training log entries
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Create or inspect the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

/// Arguments for the progress command
#[derive(Debug, Clone, Parser)]
pub struct ProgressArgs {
    /// Restrict the comparison to one exercise (case-insensitive)
    ///
    /// With an exercise, the last matching entry is compared against the
    /// one before it on weight × reps. Without one, the last seven entries
    /// are compared against the seven before them on average weight and
    /// reps.
    #[arg(short = 'e', long = "exercise", value_name = "NAME")]
    pub exercise: Option<String>,

    /// Force the last-vs-previous comparison without an exercise filter
    #[arg(long = "latest", conflicts_with = "exercise")]
    pub latest: bool,
}

/// Log subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum LogAction {
    /// Append one training entry to the log
    Add(AddEntryArgs),

    /// List all training entries in file order
    List,

    /// Remove the most recent entry from the log
    RemoveLast,
}

/// Arguments for adding a log entry
#[derive(Debug, Clone, Parser)]
pub struct AddEntryArgs {
    /// Exercise label
    #[arg(value_name = "EXERCISE")]
    pub exercise: String,

    /// Weight in kilograms
    #[arg(short = 'w', long = "weight", value_name = "KG", default_value_t = 0.0)]
    pub weight: f64,

    /// Repetitions per set
    #[arg(short = 'r', long = "reps", value_name = "COUNT", default_value_t = 0)]
    pub reps: u32,

    /// Number of sets
    #[arg(short = 's', long = "sets", value_name = "COUNT", default_value_t = 0)]
    pub sets: u32,

    /// Entry date (YYYY-MM-DD), defaulting to today
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub date: Option<String>,
}

impl AddEntryArgs {
    /// Validate the add arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.exercise.trim().is_empty() {
            return Err(Error::data_validation("Exercise label cannot be empty"));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::data_validation(format!(
                "Weight must be a non-negative number, got {}",
                self.weight
            )));
        }

        if let Some(date) = &self.date {
            NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
                Error::date_parsing(format!("Invalid entry date '{}'", date), e)
            })?;
        }

        Ok(())
    }

    /// Resolve the entry date, defaulting to today in ISO form
    pub fn resolve_date(&self) -> String {
        match &self.date {
            Some(date) => date.trim().to_string(),
            None => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Profile subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ProfileAction {
    /// Create or replace the profile
    Set(SetProfileArgs),

    /// Show the stored profile
    Show,
}

/// Arguments for setting the profile
///
/// All six fields are required: profile intake is strict, and a partial
/// profile can never produce a calorie budget.
#[derive(Debug, Clone, Parser)]
pub struct SetProfileArgs {
    /// Age in years
    #[arg(long = "age", value_name = "YEARS")]
    pub age: u32,

    /// Biological sex
    #[arg(long = "sex", value_enum)]
    pub sex: Sex,

    /// Height in centimeters
    #[arg(long = "height-cm", value_name = "CM")]
    pub height_cm: f64,

    /// Body weight in kilograms
    #[arg(long = "weight-kg", value_name = "KG")]
    pub weight_kg: f64,

    /// Activity tier
    #[arg(long = "activity", value_enum)]
    pub activity_level: ActivityLevel,

    /// Weekly weight goal
    #[arg(long = "goal", value_enum)]
    pub goal: Goal,
}

impl SetProfileArgs {
    /// Validate the profile arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(Error::data_validation("Age must be positive"));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(Error::data_validation(format!(
                "Height must be a positive number of centimeters, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(Error::data_validation(format!(
                "Weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let mut args = Args::parse_from(["fitlog", "dashboard"]);

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_add_entry_validation() {
        let args = AddEntryArgs {
            exercise: "squat".to_string(),
            weight: 100.0,
            reps: 5,
            sets: 3,
            date: Some("2025-06-01".to_string()),
        };
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.exercise = "  ".to_string();
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.weight = -5.0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.date = Some("01.06.2025".to_string());
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_resolve_date_prefers_explicit_value() {
        let args = AddEntryArgs {
            exercise: "squat".to_string(),
            weight: 100.0,
            reps: 5,
            sets: 3,
            date: Some(" 2025-06-01 ".to_string()),
        };
        assert_eq!(args.resolve_date(), "2025-06-01");
    }

    #[test]
    fn test_set_profile_validation() {
        let args = SetProfileArgs {
            age: 25,
            sex: Sex::Male,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        };
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.age = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.height_cm = 0.0;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.weight_kg = -80.0;
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_parse_progress_command() {
        let args = Args::parse_from(["fitlog", "progress", "--exercise", "squat"]);
        match args.get_command() {
            Commands::Progress(progress) => {
                assert_eq!(progress.exercise.as_deref(), Some("squat"));
                assert!(!progress.latest);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_log_add_command() {
        let args = Args::parse_from([
            "fitlog", "log", "add", "squat", "--weight", "102.5", "--reps", "5", "--sets", "3",
        ]);
        match args.get_command() {
            Commands::Log {
                action: LogAction::Add(add),
            } => {
                assert_eq!(add.exercise, "squat");
                assert_eq!(add.weight, 102.5);
                assert_eq!(add.reps, 5);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
